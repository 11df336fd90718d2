//! The submission form: field collection, local resume validation, and
//! multipart encoding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};

/// Everything the applicant filled in, plus the path to their resume.
/// Built once per run; the resume is the only locally-required field.
#[derive(Debug, Default, Clone)]
pub struct SubmissionForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub cover_letter: String,
    pub current_company: String,
    pub current_title: String,
    pub website_url: String,
    pub linkedin_url: String,
    pub resume_path: PathBuf,
}

/// Resume bytes with the metadata the proxy forwards upstream.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SubmissionForm {
    /// Reads the resume from disk. This is the local pre-submit check: an
    /// unreadable or missing file rejects the submission before any
    /// network call.
    pub fn read_resume(&self) -> Result<ResumeUpload> {
        let bytes = std::fs::read(&self.resume_path)
            .with_context(|| format!("Could not read resume at {}", self.resume_path.display()))?;
        Ok(ResumeUpload {
            filename: file_name_of(&self.resume_path),
            mime_type: mime_guess::from_path(&self.resume_path)
                .first_or_octet_stream()
                .to_string(),
            bytes,
        })
    }

    /// The text parts of the multipart body, in wire order. Blank fields
    /// are skipped; only filled-in fields become parts.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("location", self.location.as_str()),
            ("coverLetter", self.cover_letter.as_str()),
            ("currentCompany", self.current_company.as_str()),
            ("currentTitle", self.current_title.as_str()),
            ("websiteURL", self.website_url.as_str()),
            ("linkedInURL", self.linkedin_url.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Encodes the whole submission as the multipart body the proxy
    /// expects: one text part per filled-in field, plus the resume as a
    /// binary part carrying its original filename.
    pub fn into_multipart(self, resume: ResumeUpload) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value.to_string());
        }
        let part = Part::bytes(resume.bytes)
            .file_name(resume.filename)
            .mime_str(&resume.mime_type)
            .context("Invalid resume content type")?;
        Ok(form.part("resume", part))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn form_with(resume_path: PathBuf) -> SubmissionForm {
        SubmissionForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            resume_path,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_resume_rejected_locally() {
        let form = form_with(PathBuf::from("/nonexistent/resume.pdf"));
        assert!(form.read_resume().is_err());
    }

    #[test]
    fn test_read_resume_captures_filename_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ada-cv.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 fake").unwrap();

        let resume = form_with(path).read_resume().unwrap();

        assert_eq!(resume.filename, "ada-cv.pdf");
        assert_eq!(resume.mime_type, "application/pdf");
        assert_eq!(resume.bytes, b"%PDF-1.4 fake");
    }

    #[test]
    fn test_blank_fields_do_not_become_parts() {
        let form = form_with(PathBuf::from("cv.pdf"));
        let fields = form.text_fields();
        assert_eq!(
            fields,
            vec![
                ("firstName", "Ada"),
                ("lastName", "Lovelace"),
                ("email", "ada@x.com"),
            ]
        );
    }
}
