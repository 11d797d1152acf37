//! Host UI events, one per line.
//!
//! ```text
//! filter design
//! input cad
//! pdf p1 0 12
//! ```

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A filter control was clicked
    Filter(String),
    /// The search input now holds this text
    Input(String),
    ClearSearch,
    OpenDetail(String),
    CloseDetail,
    ToggleTheme,
    OpenPdf {
        project_id: String,
        document_index: usize,
        total_pages: u32,
    },
    NextPage,
    PreviousPage,
    ZoomIn,
    ZoomOut,
    ZoomFit,
    ClosePdf,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

fn required<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandParseError> {
    arg.map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(CommandParseError::MissingArgument { command, expected })
}

fn number<T: FromStr>(value: &str, field: &'static str) -> Result<T, CommandParseError> {
    value.parse().map_err(|_| CommandParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl FromStr for HostEvent {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line.trim(), None),
        };

        let event = match command {
            "" => return Err(CommandParseError::Empty),
            "filter" => HostEvent::Filter(required(rest, "filter", "a category")?.to_string()),
            // The text is kept verbatim; an empty input is a valid search.
            "input" => HostEvent::Input(rest.unwrap_or_default().to_string()),
            "clear" => HostEvent::ClearSearch,
            "open" => HostEvent::OpenDetail(required(rest, "open", "a project id")?.to_string()),
            "close" => HostEvent::CloseDetail,
            "theme" => HostEvent::ToggleTheme,
            "pdf" => {
                const EXPECTED: &str = "<project-id> <document-index> <pages>";
                let mut args = required(rest, "pdf", EXPECTED)?.split_whitespace();
                let (Some(project_id), Some(index), Some(pages), None) =
                    (args.next(), args.next(), args.next(), args.next())
                else {
                    return Err(CommandParseError::MissingArgument {
                        command: "pdf",
                        expected: EXPECTED,
                    });
                };
                HostEvent::OpenPdf {
                    project_id: project_id.to_string(),
                    document_index: number(index, "document index")?,
                    total_pages: number(pages, "page count")?,
                }
            }
            "pdf-next" => HostEvent::NextPage,
            "pdf-prev" => HostEvent::PreviousPage,
            "zoom-in" => HostEvent::ZoomIn,
            "zoom-out" => HostEvent::ZoomOut,
            "zoom-fit" => HostEvent::ZoomFit,
            "pdf-close" => HostEvent::ClosePdf,
            "quit" => HostEvent::Quit,
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };

        Ok(event)
    }
}
