//! Input messages: [`Msg`], [`Key`] and [`ModMask`].

/// A key the game can react to. Everything else is dropped by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Char(char),
}

/// Modifier keys held during a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CTRL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for ModMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One raw input message from an [`InputSource`](crate::InputSource).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Key { key: Key, modifiers: ModMask },
    Resize { width: u16, height: u16 },
}

impl Msg {
    /// A key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: ModMask::NONE,
        }
    }
}
