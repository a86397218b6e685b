//! Terrain classification for map nodes.
//!
//! A node may carry any number of terrain kinds (a hill with trees on it, a
//! boulder in shallow water). The solvers never look at terrain directly;
//! cost and accessibility rules that depend on it belong to the caller's
//! closures and map setup.

use std::fmt;

/// A terrain feature present on a map node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Water,
    Hill,
    Mountain,
    Trees,
    Boulder,
}

impl Terrain {
    /// All terrain kinds, in declaration order.
    pub const ALL: [Terrain; 5] = [
        Terrain::Water,
        Terrain::Hill,
        Terrain::Mountain,
        Terrain::Trees,
        Terrain::Boulder,
    ];
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Water => "water",
            Terrain::Hill => "hill",
            Terrain::Mountain => "mountain",
            Terrain::Trees => "trees",
            Terrain::Boulder => "boulder",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Terrain::Water.to_string(), "water");
        assert_eq!(Terrain::Boulder.to_string(), "boulder");
    }

    #[test]
    fn all_is_complete() {
        assert_eq!(Terrain::ALL.len(), 5);
    }
}
