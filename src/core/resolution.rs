use crate::util::error::BngError;

/// Supported BNG resolutions, coarsest to finest.
///
/// Standard resolutions are the powers of ten from 100km down to 1m.
/// Between each pair of standard resolutions sits a quadtree resolution at
/// exactly half the coarser size, addressed by subdividing the enclosing
/// standard square into NE/SE/SW/NW quadrants. The ladder is therefore
/// 100km, 50km, 10km, 5km, 1km, 500m, 100m, 50m, 10m, 5m, 1m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Km100,
    Km50,
    Km10,
    Km5,
    Km1,
    M500,
    M100,
    M50,
    M10,
    M5,
    M1,
}

impl Resolution {
    /// Every supported resolution, coarsest first.
    pub const ALL: [Resolution; 11] = [
        Resolution::Km100,
        Resolution::Km50,
        Resolution::Km10,
        Resolution::Km5,
        Resolution::Km1,
        Resolution::M500,
        Resolution::M100,
        Resolution::M50,
        Resolution::M10,
        Resolution::M5,
        Resolution::M1,
    ];

    /// The standard powers-of-ten resolutions, coarsest first.
    ///
    /// The index of each entry equals the number of digits per axis in a
    /// reference at that resolution.
    pub const STANDARD: [Resolution; 6] = [
        Resolution::Km100,
        Resolution::Km10,
        Resolution::Km1,
        Resolution::M100,
        Resolution::M10,
        Resolution::M1,
    ];

    /// Grid square size in metres.
    pub const fn metres(self) -> i64 {
        match self {
            Resolution::Km100 => 100_000,
            Resolution::Km50 => 50_000,
            Resolution::Km10 => 10_000,
            Resolution::Km5 => 5_000,
            Resolution::Km1 => 1_000,
            Resolution::M500 => 500,
            Resolution::M100 => 100,
            Resolution::M50 => 50,
            Resolution::M10 => 10,
            Resolution::M5 => 5,
            Resolution::M1 => 1,
        }
    }

    /// Human-readable label, e.g. `"1km"`.
    pub const fn label(self) -> &'static str {
        match self {
            Resolution::Km100 => "100km",
            Resolution::Km50 => "50km",
            Resolution::Km10 => "10km",
            Resolution::Km5 => "5km",
            Resolution::Km1 => "1km",
            Resolution::M500 => "500m",
            Resolution::M100 => "100m",
            Resolution::M50 => "50m",
            Resolution::M10 => "10m",
            Resolution::M5 => "5m",
            Resolution::M1 => "1m",
        }
    }

    /// True for the quadrant-subdivided (intermediate) resolutions.
    pub const fn is_quadtree(self) -> bool {
        matches!(
            self,
            Resolution::Km50
                | Resolution::Km5
                | Resolution::M500
                | Resolution::M50
                | Resolution::M5
        )
    }

    /// The next finer resolution in the ladder, if any.
    pub const fn finer(self) -> Option<Resolution> {
        match self {
            Resolution::Km100 => Some(Resolution::Km50),
            Resolution::Km50 => Some(Resolution::Km10),
            Resolution::Km10 => Some(Resolution::Km5),
            Resolution::Km5 => Some(Resolution::Km1),
            Resolution::Km1 => Some(Resolution::M500),
            Resolution::M500 => Some(Resolution::M100),
            Resolution::M100 => Some(Resolution::M50),
            Resolution::M50 => Some(Resolution::M10),
            Resolution::M10 => Some(Resolution::M5),
            Resolution::M5 => Some(Resolution::M1),
            Resolution::M1 => None,
        }
    }

    /// The next coarser resolution in the ladder, if any.
    pub const fn coarser(self) -> Option<Resolution> {
        match self {
            Resolution::Km100 => None,
            Resolution::Km50 => Some(Resolution::Km100),
            Resolution::Km10 => Some(Resolution::Km50),
            Resolution::Km5 => Some(Resolution::Km10),
            Resolution::Km1 => Some(Resolution::Km5),
            Resolution::M500 => Some(Resolution::Km1),
            Resolution::M100 => Some(Resolution::M500),
            Resolution::M50 => Some(Resolution::M100),
            Resolution::M10 => Some(Resolution::M50),
            Resolution::M5 => Some(Resolution::M10),
            Resolution::M1 => Some(Resolution::M5),
        }
    }

    /// Number of digits per axis in a reference at this resolution.
    pub(crate) const fn digits(self) -> usize {
        match self {
            Resolution::Km100 | Resolution::Km50 => 0,
            Resolution::Km10 | Resolution::Km5 => 1,
            Resolution::Km1 | Resolution::M500 => 2,
            Resolution::M100 | Resolution::M50 => 3,
            Resolution::M10 | Resolution::M5 => 4,
            Resolution::M1 => 5,
        }
    }

    /// For a quadtree resolution, the standard resolution whose squares it
    /// subdivides; identity for standard resolutions.
    pub(crate) const fn parent_standard(self) -> Resolution {
        match self {
            Resolution::Km50 => Resolution::Km100,
            Resolution::Km5 => Resolution::Km10,
            Resolution::M500 => Resolution::Km1,
            Resolution::M50 => Resolution::M100,
            Resolution::M5 => Resolution::M10,
            other => other,
        }
    }

    /// Looks up a resolution by its string label, e.g. `"50km"`.
    pub fn from_label(label: &str) -> Result<Resolution, BngError> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .ok_or_else(|| {
                BngError::UnknownResolution(format!("unrecognised resolution label '{}'", label))
            })
    }

    /// Looks up a resolution by its metre value, e.g. `50000`.
    pub fn from_metres(metres: i64) -> Result<Resolution, BngError> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.metres() == metres)
            .ok_or_else(|| {
                BngError::UnknownResolution(format!("unrecognised resolution {}m", metres))
            })
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_links_are_consistent() {
        for pair in Resolution::ALL.windows(2) {
            assert_eq!(pair[0].finer(), Some(pair[1]));
            assert_eq!(pair[1].coarser(), Some(pair[0]));
            assert!(pair[0].metres() > pair[1].metres());
        }
        assert_eq!(Resolution::Km100.coarser(), None);
        assert_eq!(Resolution::M1.finer(), None);
    }

    #[test]
    fn test_quadtree_is_half_its_standard_parent() {
        for res in Resolution::ALL {
            if res.is_quadtree() {
                assert_eq!(res.parent_standard().metres(), res.metres() * 2);
                assert_eq!(res.coarser(), Some(res.parent_standard()));
            }
        }
    }

    #[test]
    fn test_standard_sequence() {
        let metres: Vec<i64> = Resolution::STANDARD.iter().map(|r| r.metres()).collect();
        assert_eq!(metres, vec![100_000, 10_000, 1_000, 100, 10, 1]);
        for (digits, res) in Resolution::STANDARD.iter().enumerate() {
            assert_eq!(res.digits(), digits);
            assert!(!res.is_quadtree());
        }
    }

    #[test]
    fn test_from_label() -> Result<(), BngError> {
        assert_eq!(Resolution::from_label("1km")?, Resolution::Km1);
        assert_eq!(Resolution::from_label("50m")?, Resolution::M50);
        assert!(matches!(
            Resolution::from_label("2km"),
            Err(BngError::UnknownResolution(_))
        ));
        Ok(())
    }

    #[test]
    fn test_from_metres() -> Result<(), BngError> {
        assert_eq!(Resolution::from_metres(100_000)?, Resolution::Km100);
        assert_eq!(Resolution::from_metres(5)?, Resolution::M5);
        assert!(matches!(
            Resolution::from_metres(25),
            Err(BngError::UnknownResolution(_))
        ));
        Ok(())
    }
}
