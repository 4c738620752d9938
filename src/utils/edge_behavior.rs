use std::fmt;

/// Describes how neighbor lookups behave at the bounds of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Cells beyond the edge do not exist, so they never count as alive.
    #[default]
    NoWrap,
    /// Bounds of the field are stitched together (torus).
    WrapAround,
}

impl EdgeBehavior {
    pub const ALL: [Self; 2] = [Self::NoWrap, Self::WrapAround];

    /// Maps `index + offset` onto `0..dimension`.
    ///
    /// Returns `None` when the neighbor falls outside the field and
    /// the behavior is [`EdgeBehavior::NoWrap`].
    pub fn resolve(self, index: usize, offset: isize, dimension: usize) -> Option<usize> {
        let target = index as isize + offset;
        let dimension = dimension as isize;
        match self {
            Self::NoWrap => (0..dimension).contains(&target).then_some(target as usize),
            Self::WrapAround => Some(((target + dimension) % dimension) as usize),
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWrap => write!(f, "Dead"),
            Self::WrapAround => write!(f, "Wrap"),
        }
    }
}
