//! 4-digit personal identification number
use crate::errors::InvalidPinErr;

/// PIN guaranteed to be in range `1000..=9999`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin(u32);

impl Pin {
    /// lowest accepted PIN
    pub const MIN: u32 = 1000;
    /// highest accepted PIN
    pub const MAX: u32 = 9999;

    /// compare with value entered by user
    pub fn matches(&self, entered: u32) -> bool {
        self.0 == entered
    }
}

impl TryFrom<u32> for Pin {
    type Error = InvalidPinErr;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPinErr(value))
        }
    }
}

// never print the secret
impl std::fmt::Debug for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pin(****)")
    }
}

#[cfg(test)]
mod test {
    use super::Pin;
    use crate::errors::InvalidPinErr;

    #[test]
    fn range_bounds() {
        assert!(Pin::try_from(1000).is_ok());
        assert!(Pin::try_from(9999).is_ok());
        assert_eq!(Pin::try_from(999), Err(InvalidPinErr(999)));
        assert_eq!(Pin::try_from(10000), Err(InvalidPinErr(10000)));
        assert_eq!(Pin::try_from(70000), Err(InvalidPinErr(70000)));
    }

    #[test]
    fn debug_hides_value() {
        let p = Pin::try_from(4321).unwrap();
        assert!(p.matches(4321));
        assert!(!p.matches(1234));
        assert_eq!(format!("{p:?}"), "Pin(****)");
    }
}
