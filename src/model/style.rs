use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported atom style: '{0}'")]
pub struct ParseAtomStyleError(String);

/// Column layout of the records in an `Atoms` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomStyle {
    /// `id type x y z`
    #[default]
    Atomic,
    /// `id mol-id type x y z`
    Molecular,
}

impl AtomStyle {
    /// Keyword used for this style in LAMMPS input and data files.
    pub fn keyword(&self) -> &'static str {
        match self {
            AtomStyle::Atomic => "atomic",
            AtomStyle::Molecular => "molecular",
        }
    }

    /// Number of leading tokens an atom line must carry in this style.
    pub fn field_count(&self) -> usize {
        match self {
            AtomStyle::Atomic => 5,
            AtomStyle::Molecular => 6,
        }
    }

    #[inline]
    pub fn has_molecule_ids(&self) -> bool {
        matches!(self, AtomStyle::Molecular)
    }
}

impl fmt::Display for AtomStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for AtomStyle {
    type Err = ParseAtomStyleError;

    /// Exact, case-sensitive match on the style keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atomic" => Ok(AtomStyle::Atomic),
            "molecular" => Ok(AtomStyle::Molecular),
            _ => Err(ParseAtomStyleError(s.to_string())),
        }
    }
}

/// How the style of an `Atoms` section was decided.
///
/// A file that writes `Atoms # atomic` and one that writes plain `Atoms`
/// both decode as [`AtomStyle::Atomic`]; this keeps the two apart so that
/// callers can tell a declared style from the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleDeclaration {
    /// The section header named the style.
    Explicit(AtomStyle),
    /// No recognized style was named and [`AtomStyle::Atomic`] was assumed.
    ///
    /// `token` holds the unrecognized style word, or `None` when the header
    /// carried no style comment at all.
    Defaulted { token: Option<String> },
}

impl StyleDeclaration {
    pub fn style(&self) -> AtomStyle {
        match self {
            StyleDeclaration::Explicit(style) => *style,
            StyleDeclaration::Defaulted { .. } => AtomStyle::Atomic,
        }
    }

    #[inline]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, StyleDeclaration::Defaulted { .. })
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDeclaration::Explicit(style) => write!(f, "{style}"),
            StyleDeclaration::Defaulted { token: None } => write!(f, "atomic (assumed)"),
            StyleDeclaration::Defaulted { token: Some(token) } => {
                write!(f, "atomic (assumed, '{token}' not recognized)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn atom_style_from_str_valid() {
        assert_eq!(AtomStyle::from_str("atomic").unwrap(), AtomStyle::Atomic);
        assert_eq!(
            AtomStyle::from_str("molecular").unwrap(),
            AtomStyle::Molecular
        );
    }

    #[test]
    fn atom_style_from_str_is_case_sensitive() {
        assert!(AtomStyle::from_str("Molecular").is_err());
        assert!(AtomStyle::from_str("ATOMIC").is_err());
    }

    #[test]
    fn atom_style_from_str_invalid() {
        let err = AtomStyle::from_str("full").unwrap_err();
        assert_eq!(err.to_string(), "invalid or unsupported atom style: 'full'");
    }

    #[test]
    fn atom_style_field_counts_and_display() {
        assert_eq!(AtomStyle::Atomic.field_count(), 5);
        assert_eq!(AtomStyle::Molecular.field_count(), 6);
        assert_eq!(AtomStyle::Atomic.to_string(), "atomic");
        assert_eq!(AtomStyle::Molecular.to_string(), "molecular");
        assert!(AtomStyle::Molecular.has_molecule_ids());
        assert!(!AtomStyle::Atomic.has_molecule_ids());
    }

    #[test]
    fn declaration_resolves_style() {
        assert_eq!(
            StyleDeclaration::Explicit(AtomStyle::Molecular).style(),
            AtomStyle::Molecular
        );
        let defaulted = StyleDeclaration::Defaulted {
            token: Some("charge".into()),
        };
        assert_eq!(defaulted.style(), AtomStyle::Atomic);
        assert!(defaulted.is_defaulted());
        assert!(!StyleDeclaration::Explicit(AtomStyle::Atomic).is_defaulted());
    }

    #[test]
    fn declaration_display_distinguishes_fallback() {
        assert_eq!(
            StyleDeclaration::Explicit(AtomStyle::Atomic).to_string(),
            "atomic"
        );
        assert_eq!(
            StyleDeclaration::Defaulted { token: None }.to_string(),
            "atomic (assumed)"
        );
        assert_eq!(
            StyleDeclaration::Defaulted {
                token: Some("full".into())
            }
            .to_string(),
            "atomic (assumed, 'full' not recognized)"
        );
    }
}
