use crate::errors::ConfigError;
use std::str::FromStr;

const IMAGE_OUTPUT_WRAPPING_CHARS: [char; 2] = ['\'', '"'];

/// Part of an image reference a caller asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSection {
    Tag,
    Prefix,
}

impl FromStr for ImageSection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imageTag" => Ok(ImageSection::Tag),
            "imagePrefix" => Ok(ImageSection::Prefix),
            _ => Err(ConfigError::InvalidImageSection {
                image_section: s.to_string(),
            }),
        }
    }
}

/// Container image reference `registry-host[:port]/repository:tag`, split on its last colon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageReference {
    prefix: String,
    tag: String,
}

impl ImageReference {
    /// Parses the raw output of a kubectl jsonpath query, which may wrap the image in quotes.
    pub fn parse(raw_output: &str) -> Result<Self, ConfigError> {
        let cleaned = raw_output
            .trim()
            .trim_matches(IMAGE_OUTPUT_WRAPPING_CHARS)
            .trim();

        match cleaned.rsplit_once(':') {
            // a `/` after the last colon means the colon belongs to a registry port and there is no tag
            Some((prefix, tag)) if !prefix.is_empty() && !tag.is_empty() && !tag.contains('/') => {
                Ok(ImageReference {
                    prefix: prefix.to_string(),
                    tag: tag.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidImageReference {
                raw_output: raw_output.to_string(),
            }),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn section(&self, section: ImageSection) -> &str {
        match section {
            ImageSection::Tag => self.tag(),
            ImageSection::Prefix => self.prefix(),
        }
    }
}

/// Returns the `imageTag` or `imagePrefix` part of the image found in `raw_output`.
/// The selector is checked before the output, so an unknown selector always wins.
pub fn extract_image_section(raw_output: &str, image_section: &str) -> Result<String, ConfigError> {
    let section = ImageSection::from_str(image_section)?;
    let image = ImageReference::parse(raw_output)?;

    Ok(image.section(section).to_string())
}
