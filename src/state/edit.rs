//! Edit-form draft model for a member record.
//!
//! DESIGN
//! ======
//! The form state is a plain struct so every list operation (interest
//! merging, project image add/remove/reorder, file-size rejection) is
//! testable on the host. New uploads carry the browser `File` handle only
//! under the `csr` feature; natively an `UploadFile` is just name + size.
//!
//! Multipart field names are dictated by the backend contract: project
//! scalars as `projects[i][field]`, kept image URLs as
//! `projects[i][existingImages][]`, and new files as `projectImages_i`.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::net::types::Member;

/// Per-file upload limit enforced client-side (1 MiB).
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;

/// Fixed interest checklist; anything else goes through the custom field.
pub const INTEREST_OPTIONS: [&str; 7] = [
    "Web Development",
    "Mobile App",
    "Graphic Design",
    "Video Editing",
    "Cyber Security",
    "AI / Data",
    "Drone / Media",
];

/// A file picked in the browser. `handle` is what actually gets appended
/// to the multipart body; `preview_url` is an object URL for display.
#[derive(Clone, Debug, Default)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
    pub preview_url: Option<String>,
    #[cfg(feature = "csr")]
    pub handle: Option<web_sys::File>,
}

impl UploadFile {
    pub fn oversized(&self) -> bool {
        self.size > MAX_FILE_BYTES
    }
}

/// One entry in a project's image strip: either a URL already stored on
/// the server or a freshly picked upload.
#[derive(Clone, Debug)]
pub enum ImageSlot {
    Url(String),
    Upload(UploadFile),
}

impl ImageSlot {
    pub fn preview(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Upload(file) => file.preview_url.as_deref(),
        }
    }
}

/// A single member document slot (photo, citizenship front/back).
#[derive(Clone, Debug, Default)]
pub enum FileSlot {
    #[default]
    Empty,
    Url(String),
    Upload(UploadFile),
}

impl FileSlot {
    pub fn preview(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Url(url) => Some(url),
            Self::Upload(file) => file.preview_url.as_deref(),
        }
    }

    pub fn upload(&self) -> Option<&UploadFile> {
        match self {
            Self::Upload(file) => Some(file),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Photo,
    CitizenshipFront,
    CitizenshipBack,
}

impl DocumentKind {
    /// Multipart field name for this document.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::CitizenshipFront => "citFront",
            Self::CitizenshipBack => "citBack",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub link: String,
    pub description: String,
    pub images: Vec<ImageSlot>,
}

/// Editable copy of a member record.
#[derive(Clone, Debug, Default)]
pub struct EditDraft {
    pub full_name: String,
    pub dob: String,
    pub gender: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub education: String,
    pub college: String,
    pub status: String,
    pub skill_level: String,
    pub tools: String,
    pub interests: Vec<String>,
    pub custom_interest: String,
    pub agreement: bool,
    pub photo: FileSlot,
    pub cit_front: FileSlot,
    pub cit_back: FileSlot,
    pub projects: Vec<ProjectDraft>,
}

impl EditDraft {
    /// Build a draft from a fetched record. Interests split into the fixed
    /// checklist and a comma-joined custom remainder; the project list
    /// always contains at least one (possibly blank) entry so the form has
    /// something to render.
    pub fn from_member(member: &Member) -> Self {
        let (known, custom): (Vec<String>, Vec<String>) = member
            .interests
            .iter()
            .cloned()
            .partition(|i| INTEREST_OPTIONS.contains(&i.as_str()));

        let mut projects: Vec<ProjectDraft> = member
            .projects
            .iter()
            .map(|p| ProjectDraft {
                name: p.name.clone(),
                link: p.link.clone(),
                description: p.description.clone(),
                images: p.images.iter().cloned().map(ImageSlot::Url).collect(),
            })
            .collect();
        if projects.is_empty() {
            projects.push(ProjectDraft::default());
        }

        let slot = |url: &Option<String>| match url {
            Some(u) if !u.is_empty() => FileSlot::Url(u.clone()),
            _ => FileSlot::Empty,
        };

        Self {
            full_name: member.full_name.clone(),
            dob: member.dob.clone().unwrap_or_default(),
            gender: member.gender.clone().unwrap_or_default(),
            mobile: member.mobile.clone().unwrap_or_default(),
            email: member.email.clone(),
            address: member.address.clone().unwrap_or_default(),
            education: member.education.clone().unwrap_or_default(),
            college: member.college.clone().unwrap_or_default(),
            status: member.status.clone().unwrap_or_default(),
            skill_level: member.skill_level.clone().unwrap_or_default(),
            tools: member.tools.clone().unwrap_or_default(),
            interests: known,
            custom_interest: custom.join(", "),
            agreement: member.agreement,
            photo: slot(&member.photo),
            cit_front: slot(&member.cit_front),
            cit_back: slot(&member.cit_back),
            projects,
        }
    }

    // ------------------------------------------------------------------
    // Interests
    // ------------------------------------------------------------------

    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_owned());
        }
    }

    /// Move the comma-separated custom entries into the interest list,
    /// trimming and skipping duplicates. Returns how many were added.
    pub fn merge_custom_interests(&mut self) -> usize {
        let added: Vec<String> = self
            .custom_interest
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty() && !self.interests.iter().any(|x| x == i))
            .map(ToOwned::to_owned)
            .collect();
        let count = added.len();
        self.interests.extend(added);
        if count > 0 {
            self.custom_interest.clear();
        }
        count
    }

    /// Interests as submitted: the checklist plus any custom text still
    /// sitting in the field, deduplicated. Non-destructive.
    pub fn final_interests(&self) -> Vec<String> {
        let mut all = self.interests.clone();
        for item in self.custom_interest.split(',') {
            let item = item.trim();
            if !item.is_empty() && !all.iter().any(|x| x == item) {
                all.push(item.to_owned());
            }
        }
        all
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    fn document_slot(&mut self, kind: DocumentKind) -> &mut FileSlot {
        match kind {
            DocumentKind::Photo => &mut self.photo,
            DocumentKind::CitizenshipFront => &mut self.cit_front,
            DocumentKind::CitizenshipBack => &mut self.cit_back,
        }
    }

    /// Replace a document with a new upload. Oversized files are rejected
    /// and the slot keeps its previous value.
    pub fn set_document(&mut self, kind: DocumentKind, file: UploadFile) -> bool {
        if file.oversized() {
            return false;
        }
        *self.document_slot(kind) = FileSlot::Upload(file);
        true
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub fn add_project(&mut self) {
        self.projects.push(ProjectDraft::default());
    }

    pub fn remove_project(&mut self, index: usize) {
        if index < self.projects.len() {
            self.projects.remove(index);
        }
    }

    /// Append uploads to a project's image strip, keeping everything
    /// already there. Returns how many files were rejected for size.
    pub fn add_project_images(&mut self, index: usize, files: Vec<UploadFile>) -> usize {
        let Some(project) = self.projects.get_mut(index) else {
            return files.len();
        };
        let mut rejected = 0;
        for file in files {
            if file.oversized() {
                rejected += 1;
            } else {
                project.images.push(ImageSlot::Upload(file));
            }
        }
        rejected
    }

    pub fn remove_project_image(&mut self, project: usize, image: usize) {
        if let Some(p) = self.projects.get_mut(project) {
            if image < p.images.len() {
                p.images.remove(image);
            }
        }
    }

    /// Swap an image with its neighbor. Out-of-range moves are ignored.
    pub fn move_project_image(&mut self, project: usize, image: usize, towards_end: bool) {
        let Some(p) = self.projects.get_mut(project) else {
            return;
        };
        let target = if towards_end {
            image + 1
        } else {
            let Some(t) = image.checked_sub(1) else {
                return;
            };
            t
        };
        if image < p.images.len() && target < p.images.len() {
            p.images.swap(image, target);
        }
    }

    // ------------------------------------------------------------------
    // Multipart enumeration
    // ------------------------------------------------------------------

    /// Scalar member fields, skipping blanks the way the backend expects.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("fullName", self.full_name.as_str()),
            ("dob", self.dob.as_str()),
            ("gender", self.gender.as_str()),
            ("mobile", self.mobile.as_str()),
            ("email", self.email.as_str()),
            ("address", self.address.as_str()),
            ("education", self.education.as_str()),
            ("college", self.college.as_str()),
            ("status", self.status.as_str()),
            ("skillLevel", self.skill_level.as_str()),
            ("tools", self.tools.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    pub fn interests_json(&self) -> String {
        serde_json::to_string(&self.final_interests()).unwrap_or_else(|_| "[]".to_owned())
    }
}

/// Multipart name for a project scalar, e.g. `projects[0][name]`.
pub fn project_field(index: usize, field: &str) -> String {
    format!("projects[{index}][{field}]")
}

/// Multipart name under which a project's kept image URLs are re-sent.
pub fn project_existing_images_field(index: usize) -> String {
    format!("projects[{index}][existingImages][]")
}

/// Multipart name for a project's newly uploaded files.
pub fn project_uploads_field(index: usize) -> String {
    format!("projectImages_{index}")
}
