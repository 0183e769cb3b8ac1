//! Per-node boolean attributes.

use bitflags::bitflags;

bitflags! {
    /// Syntax attributes that are not children of their own.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// Value argument written with the spread operator: `*arr`.
        const SPREAD = 1 << 0;
        /// Property declared with `var`.
        const MUTABLE = 1 << 1;
        /// Property value given with `by` instead of `=`.
        const DELEGATED = 1 << 2;
        /// Simple name used as a label reference: `@outer`.
        const LABEL = 1 << 3;
    }
}

impl NodeFlags {
    #[inline]
    pub fn is_spread(self) -> bool {
        self.contains(Self::SPREAD)
    }

    #[inline]
    pub fn is_mutable(self) -> bool {
        self.contains(Self::MUTABLE)
    }

    #[inline]
    pub fn is_label(self) -> bool {
        self.contains(Self::LABEL)
    }
}
