use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotColourMapKind {
    Twilight,
    Grayscale,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Twilight, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Twilight => "Twilight",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Short lowercase name used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Twilight => "twilight",
            Self::Grayscale => "grayscale",
        }
    }

    /// The kind after this one in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Default for MandelbrotColourMapKind {
    fn default() -> Self {
        Self::Twilight
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapError {
    pub name: String,
}

impl fmt::Display for UnknownColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = MandelbrotColourMapKind::ALL.iter().map(|k| k.key()).collect();
        write!(f, "unknown colour map '{}', expected one of: {}", self.name, known.join(", "))
    }
}

impl Error for UnknownColourMapError {}

impl FromStr for MandelbrotColourMapKind {
    type Err = UnknownColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == wanted || kind.display_name().to_ascii_lowercase() == wanted)
            .ok_or(UnknownColourMapError { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKind::ALL.first(),
            Some(&MandelbrotColourMapKind::default())
        );
    }

    #[test]
    fn parses_keys_and_display_names() {
        for &kind in MandelbrotColourMapKind::ALL {
            assert_eq!(kind.key().parse::<MandelbrotColourMapKind>(), Ok(kind));
            assert_eq!(kind.display_name().parse::<MandelbrotColourMapKind>(), Ok(kind));
        }
        assert_eq!(" GRAYSCALE ".parse(), Ok(MandelbrotColourMapKind::Grayscale));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "fire".parse::<MandelbrotColourMapKind>().unwrap_err();

        assert_eq!(err.name, "fire");
        assert_eq!(
            err.to_string(),
            "unknown colour map 'fire', expected one of: twilight, grayscale"
        );
    }

    #[test]
    fn next_cycles_through_all_kinds() {
        let mut kind = MandelbrotColourMapKind::default();
        for _ in 0..MandelbrotColourMapKind::ALL.len() {
            kind = kind.next();
        }

        assert_eq!(kind, MandelbrotColourMapKind::default());
        assert_eq!(MandelbrotColourMapKind::Twilight.next(), MandelbrotColourMapKind::Grayscale);
    }
}
