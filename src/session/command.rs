//! The single-letter command table.

use std::fmt;

/// A command understood by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Menu,
    Load,
    View,
    Info,
    ScaleDown,
    Crop,
    Brighten,
    EdgeDetect,
    Colorize,
    RedGreenColorblindness,
    BlackAndWhite,
    Save,
    Quit,
    Negative,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Self; 14] = [
        Self::Menu,
        Self::Load,
        Self::View,
        Self::Info,
        Self::ScaleDown,
        Self::Crop,
        Self::Brighten,
        Self::EdgeDetect,
        Self::Colorize,
        Self::RedGreenColorblindness,
        Self::BlackAndWhite,
        Self::Save,
        Self::Quit,
        Self::Negative,
    ];

    /// Key that selects this command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Menu => 'M',
            Self::Load => 'L',
            Self::View => 'V',
            Self::Info => 'I',
            Self::ScaleDown => 'F',
            Self::Crop => 'Z',
            Self::Brighten => 'B',
            Self::EdgeDetect => 'E',
            Self::Colorize => 'C',
            Self::RedGreenColorblindness => 'R',
            Self::BlackAndWhite => 'W',
            Self::Save => 'S',
            Self::Quit => 'Q',
            Self::Negative => 'N',
        }
    }

    /// Menu description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Menu => "print this menu",
            Self::Load => "ask for a name of an image file and load it into the system",
            Self::View => "view the current image",
            Self::Info => "print Info about the image including its size",
            Self::ScaleDown => {
                "scale down the image by an integer factor k (and ask the user for that factor)"
            }
            Self::Crop => "zoom in on a range of the image (ask the user for the bounds)",
            Self::Brighten => "brighten the image by a specified value (ask the user for the value)",
            Self::EdgeDetect => "run edge detection on the image with a specified difference value",
            Self::Colorize => "colorize the image with the factor alpha (ask the user for alpha)",
            Self::RedGreenColorblindness => {
                "run the red-green-color blindness filter on the image"
            }
            Self::BlackAndWhite => {
                "turn the image black and white with a specified cutoff (ask the user for the cutoff)"
            }
            Self::Save => "save the image in a file (ask the user for the file name)",
            Self::Quit => "quit the program",
            Self::Negative => "create a negative version of the image",
        }
    }

    /// Whether the command operates on the session image.
    #[must_use]
    pub const fn needs_image(self) -> bool {
        !matches!(self, Self::Menu | Self::Load | Self::Quit)
    }

    /// Parse a console line; case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        let key = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|command| command.key() == key)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key(), self.description())
    }
}
