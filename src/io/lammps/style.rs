use crate::io::error::Error;
use crate::io::tokenizer::Line;
use crate::model::style::{AtomStyle, StyleDeclaration};

const SECTION: &str = "Atoms";

/// Decides the atom style from an `Atoms` section header, exactly once.
///
/// A line containing `molecular` selects [`AtomStyle::Molecular`]; any
/// other line selects [`AtomStyle::Atomic`], either explicitly (`# atomic`)
/// or as a fallback that is reported through [`StyleDeclaration::Defaulted`].
#[derive(Debug, Default)]
pub struct StyleDetector {
    decided: Option<AtomStyle>,
}

impl StyleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> Option<AtomStyle> {
        self.decided
    }

    /// Inspects the section header line.
    ///
    /// Fails with [`Error::StyleAlreadyDetected`] on a second call, keeping
    /// the first decision.
    pub fn detect(&mut self, line: &Line<'_>) -> Result<StyleDeclaration, Error> {
        if let Some(style) = self.decided {
            return Err(Error::StyleAlreadyDetected(style));
        }
        line.require(SECTION)?;

        let declaration = if line.contains("molecular") {
            StyleDeclaration::Explicit(AtomStyle::Molecular)
        } else {
            match style_token(line.text) {
                Some(token) => match token.parse::<AtomStyle>() {
                    Ok(style) => StyleDeclaration::Explicit(style),
                    Err(_) => StyleDeclaration::Defaulted {
                        token: Some(token.to_string()),
                    },
                },
                None => StyleDeclaration::Defaulted { token: None },
            }
        };

        match &declaration {
            StyleDeclaration::Defaulted { token: Some(token) } => tracing::warn!(
                line = line.number,
                token = %token,
                "unrecognized atom style, assuming atomic"
            ),
            StyleDeclaration::Defaulted { token: None } => tracing::warn!(
                line = line.number,
                "Atoms section does not declare a style, assuming atomic"
            ),
            StyleDeclaration::Explicit(style) => {
                tracing::debug!(line = line.number, style = %style, "detected atom style")
            }
        }

        self.decided = Some(declaration.style());
        Ok(declaration)
    }
}

/// First word after the section keyword, with the `#` comment marker removed.
fn style_token(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once(SECTION)?;
    rest.trim_start()
        .trim_start_matches('#')
        .split_whitespace()
        .next()
}
