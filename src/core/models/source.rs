//! Input sources for extraction
//!
//! Transcripts and documents are both flattened into a single text stream
//! before segmentation.

use serde::{Deserialize, Serialize};

/// One diarized transcript segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Speaker label
    #[serde(default)]
    pub speaker: String,
    /// Start offset in seconds
    #[serde(default)]
    pub start_time: f64,
    /// End offset in seconds
    #[serde(default)]
    pub end_time: f64,
    /// Spoken text
    pub text: String,
}

/// A titled section of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    /// Section heading
    #[serde(default)]
    pub title: String,
    /// Section body
    #[serde(default)]
    pub content: String,
}

/// Text already pulled out of a PDF, Word or slide document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentText {
    /// Full document text
    pub text: String,
    /// Section structure, if the parser found any
    #[serde(default)]
    pub sections: Vec<DocumentSection>,
}

/// Where the text handed to the pipeline came from
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    /// Plain text
    Raw(String),
    /// Transcript segments, joined with single spaces
    Transcript(Vec<TranscriptSegment>),
    /// Parsed document
    Document(DocumentText),
}

impl TextSource {
    /// The concatenated text stream
    #[must_use]
    pub fn full_text(&self) -> String {
        match self {
            Self::Raw(text) => text.clone(),
            Self::Transcript(segments) => segments
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Document(doc) => doc.text.clone(),
        }
    }

    /// Number of input segments reported in the extraction metadata
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self {
            Self::Raw(text) => usize::from(!text.trim().is_empty()),
            Self::Transcript(segments) => segments.len(),
            Self::Document(doc) => doc.sections.len(),
        }
    }
}
