//! Interactive editing session.
//!
//! A [`Session`] owns at most one image. Each command read from the console
//! either inspects that image or replaces it with a transformed copy.

mod command;
mod prompt;

pub use command::Command;
pub use prompt::Prompter;

use std::io::{BufRead, Write};
use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};
use crate::filters::Filter;
use crate::image::{self as imageio, CropRect, ResizeFilter, DEFAULT_JPEG_QUALITY};
use crate::viewer;

/// Configuration for an editing session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Output JPEG quality (1-100).
    pub jpeg_quality: u8,

    /// Resampling kernel used when scaling down.
    pub resize_filter: ResizeFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            resize_filter: ResizeFilter::default(),
        }
    }
}

impl SessionConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::invalid_parameter(
                "jpeg_quality",
                "must be between 1 and 100",
            ));
        }

        Ok(())
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive session holding the current image.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    image: Option<RgbImage>,
}

impl Session {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Starting session with config: {config:?}");

        Ok(Self {
            config,
            image: None,
        })
    }

    /// The current image, if one is loaded.
    #[must_use]
    pub const fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    /// Replace the current image with one read from disk.
    ///
    /// On failure the current image is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = imageio::load_image(path)?;
        tracing::info!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
        self.image = Some(img);
        Ok(())
    }

    /// Apply a filter to the current image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] if no image is loaded.
    pub fn apply(&mut self, filter: Filter) -> Result<()> {
        let img = self.require_image()?;
        let filtered = filter.apply(img);
        self.replace(filter.name(), filtered);
        Ok(())
    }

    /// Run commands from `input` until `Q` or end of input.
    ///
    /// Command failures are reported on `output` and the loop continues;
    /// only a failure to write to `output` ends it early.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut prompter = Prompter::new(input, output);

        loop {
            let Some(line) = prompter.read_line("Enter a command: ")? else {
                tracing::debug!("End of input");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                prompter.say("Invalid command.")?;
                continue;
            };

            match self.execute(command, &mut prompter) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(Error::NoImage) => prompter.say(Error::NoImage)?,
                Err(err) => {
                    tracing::warn!("Command {} failed: {err}", command.key());
                    prompter.say(format_args!("Error: {err}"))?;
                }
            }
        }

        Ok(())
    }

    /// Execute one command, prompting for its arguments.
    fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow> {
        tracing::debug!("Dispatching command {command:?}");

        if command.needs_image() {
            self.require_image()?;
        }

        match command {
            Command::Menu => {
                for entry in Command::ALL {
                    prompter.say(entry)?;
                }
            }
            Command::Load => {
                let path = prompter.path("Enter the image file name: ")?;
                self.load(path)?;
            }
            Command::View => viewer::show(self.require_image()?, "imagecraft")?,
            Command::Info => {
                let (width, height) = self.require_image()?.dimensions();
                prompter.say(format_args!("Image size: ({width}, {height})"))?;
            }
            Command::ScaleDown => {
                let factor = prompter.integer("Enter the scale down factor: ")?;
                let scaled =
                    imageio::scale_down(self.require_image()?, factor, self.config.resize_filter)?;
                self.replace("scale down", scaled);
            }
            Command::Crop => {
                let rect = CropRect {
                    left: prompter.integer("Enter left boundary: ")?,
                    upper: prompter.integer("Enter upper boundary: ")?,
                    right: prompter.integer("Enter right boundary: ")?,
                    lower: prompter.integer("Enter lower boundary: ")?,
                };
                let cropped = imageio::crop(self.require_image()?, rect)?;
                self.replace("crop", cropped);
            }
            Command::Brighten => {
                let delta = prompter.integer_i32("Enter the brightness value: ")?;
                self.apply(Filter::Brighten { delta })?;
            }
            Command::EdgeDetect => {
                let threshold =
                    prompter.integer_i32("Enter the edge detection difference value: ")?;
                self.apply(Filter::EdgeDetect { threshold })?;
            }
            Command::Colorize => {
                let alpha = prompter.float("Enter the colorize alpha value: ")?;
                if !alpha.is_finite() {
                    return Err(Error::invalid_parameter("alpha", "must be a finite number"));
                }
                self.apply(Filter::Colorize { alpha })?;
            }
            Command::RedGreenColorblindness => self.apply(Filter::RedGreenColorblindness)?,
            Command::BlackAndWhite => {
                let cutoff = prompter.integer_i32("Enter the black and white cutoff: ")?;
                self.apply(Filter::BlackAndWhite { cutoff })?;
            }
            Command::Negative => {
                self.apply(Filter::Negative)?;
                prompter.say("Negative version of the image created.")?;
            }
            Command::Save => {
                let path = prompter.path("Enter the output file name: ")?;
                imageio::save_image(self.require_image()?, &path, self.config.jpeg_quality)?;
                tracing::info!("Saved {}", path.display());
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn require_image(&self) -> Result<&RgbImage> {
        self.image.as_ref().ok_or(Error::NoImage)
    }

    fn replace(&mut self, operation: &str, img: RgbImage) {
        tracing::info!("Applied {operation} ({}x{})", img.width(), img.height());
        self.image = Some(img);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    fn session_with(img: RgbImage) -> Session {
        Session {
            config: SessionConfig::default(),
            image: Some(img),
        }
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        session
            .run(Cursor::new(script.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(SessionConfig::default().validate().is_ok());
        let config = SessionConfig {
            jpeg_quality: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_commands_without_image() {
        let mut session = Session::default();
        let out = run_script(&mut session, "v\ni\nn\nr\nb\nq\n");
        assert_eq!(out.matches("No image loaded.").count(), 5);
        assert!(session.image().is_none());
    }

    #[test]
    fn test_argument_commands_without_image_do_not_prompt() {
        let mut session = Session::default();
        let out = run_script(&mut session, "s\nf\nz\nc\ne\nw\nq\n");
        assert_eq!(out.matches("No image loaded.").count(), 6);
        assert!(!out.contains("Enter the output file name"));
        assert!(!out.contains("Enter left boundary"));
        assert!(session.image().is_none());
    }

    #[test]
    fn test_invalid_command() {
        let mut session = Session::default();
        let out = run_script(&mut session, "x\n\nq\n");
        assert_eq!(out.matches("Invalid command.").count(), 1);
    }

    #[test]
    fn test_menu_lists_every_command() {
        let mut session = Session::default();
        let out = run_script(&mut session, "M\nQ\n");
        for command in Command::ALL {
            assert!(out.contains(&command.to_string()), "missing {command:?}");
        }
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session_with(RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])));
        run_script(&mut session, "q\nn\n");
        assert_eq!(session.image().unwrap().get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn test_info() {
        let mut session = session_with(RgbImage::new(640, 480));
        let out = run_script(&mut session, "I\n");
        assert!(out.contains("Image size: (640, 480)"));
    }

    #[test]
    fn test_black_and_white_on_gray() {
        let mut session = session_with(RgbImage::from_pixel(4, 4, Rgb([128, 128, 128])));
        run_script(&mut session, "w\n128\nq\n");
        let img = session.image().unwrap();
        assert_eq!(img.dimensions(), (4, 4));
        assert!(img.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_brighten_clamps() {
        let mut session = session_with(RgbImage::from_pixel(1, 1, Rgb([10, 10, 10])));
        run_script(&mut session, "B\n300\n");
        assert_eq!(session.image().unwrap().get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_colorblindness_and_negative() {
        let mut session = session_with(RgbImage::from_pixel(1, 1, Rgb([100, 200, 50])));
        let out = run_script(&mut session, "r\nn\n");
        assert!(out.contains("Negative version of the image created."));
        assert_eq!(session.image().unwrap().get_pixel(0, 0), &Rgb([105, 105, 205]));
    }

    #[test]
    fn test_colorize_and_edge_detect() {
        let mut session = session_with(RgbImage::from_pixel(3, 3, Rgb([200, 100, 0])));
        run_script(&mut session, "c\n1\ne\n10\n");
        let img = session.image().unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(2, 2), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_colorize_rejects_nan() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 100, 0]));
        let mut session = session_with(img.clone());
        let out = run_script(&mut session, "c\nnan\n");
        assert!(out.contains("Error: invalid parameter alpha"));
        assert_eq!(session.image(), Some(&img));
    }

    #[test]
    fn test_bad_number_keeps_image_and_continues() {
        let img = RgbImage::from_pixel(2, 2, Rgb([5, 6, 7]));
        let mut session = session_with(img.clone());
        let out = run_script(&mut session, "b\nlots\ni\n");
        assert!(out.contains("Error: invalid input \"lots\""));
        assert!(out.contains("Image size: (2, 2)"));
        assert_eq!(session.image(), Some(&img));
    }

    #[test]
    fn test_scale_down_and_crop() {
        let mut session = session_with(RgbImage::new(10, 6));
        run_script(&mut session, "f\n2\n");
        assert_eq!(session.image().unwrap().dimensions(), (5, 3));

        run_script(&mut session, "z\n1\n0\n4\n2\n");
        assert_eq!(session.image().unwrap().dimensions(), (3, 2));

        let out = run_script(&mut session, "f\n0\n");
        assert!(out.contains("Error: invalid parameter factor"));
        assert_eq!(session.image().unwrap().dimensions(), (3, 2));
    }

    #[test]
    fn test_failed_load_keeps_image() {
        let img = RgbImage::new(2, 3);
        let mut session = session_with(img.clone());
        let out = run_script(&mut session, "l\nno/such/file.png\n");
        assert!(out.contains("Error: failed to load image"));
        assert_eq!(session.image(), Some(&img));
    }

    #[test]
    fn test_apply_without_image() {
        let mut session = Session::default();
        assert!(matches!(
            session.apply(Filter::Negative),
            Err(Error::NoImage)
        ));
    }
}
