//! Section Tagger: annotates resume text with synthetic section markers.
//!
//! Each non-blank line is matched, case-insensitively, against a fixed keyword
//! taxonomy. A matching line is preceded by a `[<SECTION> SECTION]` marker.
//! Markers are pure insertions: stripping them gives back the original lines.

use std::fmt;

/// Resume section recognised by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Summary,
    Contact,
}

impl Section {
    /// Match priority: the first section whose keywords hit a line wins.
    pub const PRIORITY: [Section; 5] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Summary,
        Section::Contact,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::Experience => &["experience", "employment", "work history"],
            Section::Education => &["education", "academic", "qualification"],
            Section::Skills => &["skills", "technical", "competencies"],
            Section::Summary => &["summary", "objective", "profile"],
            Section::Contact => &["contact", "email", "phone"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Experience => "EXPERIENCE",
            Section::Education => "EDUCATION",
            Section::Skills => "SKILLS",
            Section::Summary => "SUMMARY",
            Section::Contact => "CONTACT",
        }
    }

    /// Classifies a single line, or `None` if no keyword appears in it.
    pub fn detect(line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|section| section.keywords().iter().any(|k| lower.contains(k)))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} SECTION]", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaggedLine {
    Marker(Section),
    /// An original line, verbatim, with the section it falls under so far.
    Content {
        text: String,
        section: Option<Section>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedDocument {
    lines: Vec<TaggedLine>,
}

impl TaggedDocument {
    pub fn lines(&self) -> &[TaggedLine] {
        &self.lines
    }

    /// Sections in the order their markers were inserted.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.lines.iter().filter_map(|line| match line {
            TaggedLine::Marker(section) => Some(*section),
            TaggedLine::Content { .. } => None,
        })
    }

    /// Renders the document as text: every marker sits on its own line after
    /// a blank line, and the whole result is trimmed.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                TaggedLine::Marker(section) => {
                    out.push('\n');
                    out.push_str(&section.to_string());
                    out.push('\n');
                }
                TaggedLine::Content { text, .. } => {
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out.trim().to_string()
    }

    /// Like [`render`](Self::render), but hands back `original` unchanged when
    /// rendering would produce nothing.
    pub fn render_or(&self, original: &str) -> String {
        let rendered = self.render();
        if rendered.is_empty() {
            original.to_string()
        } else {
            rendered
        }
    }
}

pub fn tag_sections(text: &str) -> TaggedDocument {
    let mut lines = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
        if let Some(section) = Section::detect(line) {
            current = Some(section);
            lines.push(TaggedLine::Marker(section));
        }
        lines.push(TaggedLine::Content {
            text: line.to_string(),
            section: current,
        });
    }

    TaggedDocument { lines }
}
