use crate::core::fractals::mandelbrot::colour_mapping::kinds::{
    MandelbrotColourMapKind, UnknownColourMapError,
};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A discrete navigation request. Every accepted command is followed by
/// exactly one re-render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerCommand {
    Pan { dx: i32, dy: i32 },
    ZoomAt { multiplier: f64, px: u32, py: u32 },
    ZoomCentre(f64),
    Resize { width: u32, height: u32 },
    Reset,
    SetPalette(MandelbrotColourMapKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseCommandError {
    UnknownCommand {
        name: String,
    },
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidArgument {
        command: &'static str,
        argument: String,
    },
    UnknownColourMap(UnknownColourMapError),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(
                f,
                "unknown command '{}', expected one of: pan, zoom, zoom-centre, resize, reset, palette",
                name
            ),
            Self::WrongArgumentCount {
                command,
                expected,
                actual,
            } => write!(
                f,
                "'{}' takes {} argument(s) but {} were given",
                command, expected, actual
            ),
            Self::InvalidArgument { command, argument } => {
                write!(f, "invalid argument '{}' for '{}'", argument, command)
            }
            Self::UnknownColourMap(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParseCommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownColourMap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownColourMapError> for ParseCommandError {
    fn from(err: UnknownColourMapError) -> Self {
        Self::UnknownColourMap(err)
    }
}

fn arguments<'a>(
    command: &'static str,
    raw: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, ParseCommandError> {
    let args: Vec<&str> = if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::trim).collect()
    };

    if args.len() != expected {
        return Err(ParseCommandError::WrongArgumentCount {
            command,
            expected,
            actual: args.len(),
        });
    }

    Ok(args)
}

fn parse_argument<T: FromStr>(command: &'static str, raw: &str) -> Result<T, ParseCommandError> {
    raw.parse().map_err(|_| ParseCommandError::InvalidArgument {
        command,
        argument: raw.to_string(),
    })
}

/// Textual form: `pan:DX,DY`, `zoom:M,PX,PY`, `zoom-centre:M`, `resize:W,H`,
/// `reset`, `palette:NAME`.
impl FromStr for ViewerCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s.trim().split_once(':').unwrap_or((s.trim(), ""));

        match name.to_ascii_lowercase().as_str() {
            "pan" => {
                let args = arguments("pan", raw, 2)?;
                Ok(Self::Pan {
                    dx: parse_argument("pan", args[0])?,
                    dy: parse_argument("pan", args[1])?,
                })
            }
            "zoom" => {
                let args = arguments("zoom", raw, 3)?;
                Ok(Self::ZoomAt {
                    multiplier: parse_argument("zoom", args[0])?,
                    px: parse_argument("zoom", args[1])?,
                    py: parse_argument("zoom", args[2])?,
                })
            }
            "zoom-centre" | "zoom-center" => {
                let args = arguments("zoom-centre", raw, 1)?;
                Ok(Self::ZoomCentre(parse_argument("zoom-centre", args[0])?))
            }
            "resize" => {
                let args = arguments("resize", raw, 2)?;
                Ok(Self::Resize {
                    width: parse_argument("resize", args[0])?,
                    height: parse_argument("resize", args[1])?,
                })
            }
            "reset" => {
                arguments("reset", raw, 0)?;
                Ok(Self::Reset)
            }
            "palette" => {
                let args = arguments("palette", raw, 1)?;
                Ok(Self::SetPalette(args[0].parse()?))
            }
            _ => Err(ParseCommandError::UnknownCommand {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_command() {
        assert_eq!("pan:10,-4".parse(), Ok(ViewerCommand::Pan { dx: 10, dy: -4 }));
        assert_eq!(
            "zoom:1.5,400,228".parse(),
            Ok(ViewerCommand::ZoomAt {
                multiplier: 1.5,
                px: 400,
                py: 228
            })
        );
        assert_eq!("zoom-centre:0.5".parse(), Ok(ViewerCommand::ZoomCentre(0.5)));
        assert_eq!(
            "resize:1024,768".parse(),
            Ok(ViewerCommand::Resize {
                width: 1024,
                height: 768
            })
        );
        assert_eq!("reset".parse(), Ok(ViewerCommand::Reset));
        assert_eq!(
            "palette:grayscale".parse(),
            Ok(ViewerCommand::SetPalette(MandelbrotColourMapKind::Grayscale))
        );
    }

    #[test]
    fn test_tolerates_whitespace_and_case() {
        assert_eq!(" PAN: 3 , 4 ".parse(), Ok(ViewerCommand::Pan { dx: 3, dy: 4 }));
        assert_eq!("zoom-center:2".parse(), Ok(ViewerCommand::ZoomCentre(2.0)));
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert_eq!(
            "spin:90".parse::<ViewerCommand>(),
            Err(ParseCommandError::UnknownCommand {
                name: "spin".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert_eq!(
            "pan:1".parse::<ViewerCommand>(),
            Err(ParseCommandError::WrongArgumentCount {
                command: "pan",
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            "reset:now".parse::<ViewerCommand>(),
            Err(ParseCommandError::WrongArgumentCount { .. })
        ));
    }

    #[test]
    fn test_rejects_unparsable_argument() {
        assert_eq!(
            "resize:-5,10".parse::<ViewerCommand>(),
            Err(ParseCommandError::InvalidArgument {
                command: "resize",
                argument: "-5".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_unknown_palette() {
        let err = "palette:rainbow".parse::<ViewerCommand>().unwrap_err();

        assert!(matches!(err, ParseCommandError::UnknownColourMap(_)));
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn test_non_positive_zoom_still_parses() {
        // Multiplier validation belongs to the view, not the parser.
        assert_eq!("zoom-centre:-2".parse(), Ok(ViewerCommand::ZoomCentre(-2.0)));
    }
}
