use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use bytes::Bytes;

use crate::ats::types::{NewApplication, SocialValue, TypedValue};
use crate::ats::NewCandidate;
use crate::errors::AppError;

/// One applicant's form data, alive for the duration of a single request.
///
/// Absent multipart parts resolve to empty strings (or `None` for the
/// resume); required-field enforcement is the client's job.
#[derive(Debug, Default)]
pub struct ApplicationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Collected from the form but not part of the candidate payload;
    /// Harvest has no cover-letter field on candidate creation.
    pub cover_letter: String,
    pub current_company: String,
    pub current_title: String,
    pub website_url: String,
    pub linkedin_url: String,
    pub resume: Option<ResumeFile>,
}

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    /// Content type declared by the uploading client, if any.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ApplicationSubmission {
    /// Drains a multipart request into a submission record. Unknown part
    /// names are ignored; a malformed multipart stream is the only error.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = ApplicationSubmission::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "resume" {
                let filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                submission.resume = Some(ResumeFile {
                    filename,
                    content_type,
                    bytes,
                });
                continue;
            }

            let value = field.text().await.map_err(malformed)?;
            match name.as_str() {
                "firstName" => submission.first_name = value,
                "lastName" => submission.last_name = value,
                "email" => submission.email = value,
                "phone" => submission.phone = value,
                "location" => submission.location = value,
                "coverLetter" => submission.cover_letter = value,
                "currentCompany" => submission.current_company = value,
                "currentTitle" => submission.current_title = value,
                "websiteURL" => submission.website_url = value,
                "linkedInURL" => submission.linkedin_url = value,
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Maps the form fields into the Harvest candidate schema.
    ///
    /// Blank optional inputs consistently become empty lists (`company`
    /// and `title` stay nullable scalars); the email is always a single
    /// personal entry, and `applications` holds exactly the configured job.
    pub fn to_candidate(&self, job_id: &str) -> NewCandidate {
        NewCandidate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: non_empty(&self.current_company),
            title: non_empty(&self.current_title),
            email_addresses: vec![TypedValue::personal(self.email.clone())],
            phone_numbers: typed_list(&self.phone, TypedValue::mobile),
            addresses: typed_list(&self.location, TypedValue::home),
            website_addresses: typed_list(&self.website_url, TypedValue::personal),
            social_media_addresses: if self.linkedin_url.is_empty() {
                Vec::new()
            } else {
                vec![SocialValue {
                    value: self.linkedin_url.clone(),
                }]
            },
            applications: vec![NewApplication {
                job_id: job_id.to_string(),
            }],
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn typed_list(value: &str, make: impl FnOnce(String) -> TypedValue) -> Vec<TypedValue> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![make(value.to_string())]
    }
}

fn malformed(e: MultipartError) -> AppError {
    AppError::BadRequest(format!("malformed multipart body: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use serde_json::json;

    fn submission(first: &str, phone: &str) -> ApplicationSubmission {
        ApplicationSubmission {
            first_name: first.to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_candidate_mapping_full_scenario() {
        let sub = submission("Ada", "555-0100");
        let body = serde_json::to_value(sub.to_candidate("4285367007")).unwrap();

        assert_eq!(body["first_name"], "Ada");
        assert_eq!(body["last_name"], "Lovelace");
        assert_eq!(
            body["email_addresses"],
            json!([{"value": "ada@x.com", "type": "personal"}])
        );
        assert_eq!(
            body["phone_numbers"],
            json!([{"value": "555-0100", "type": "mobile"}])
        );
        assert_eq!(body["applications"], json!([{"job_id": "4285367007"}]));
    }

    #[test]
    fn test_blank_optional_fields_become_empty_lists_and_nulls() {
        let sub = submission("Ada", "");
        let body = serde_json::to_value(sub.to_candidate("j1")).unwrap();

        assert_eq!(body["company"], json!(null));
        assert_eq!(body["title"], json!(null));
        assert_eq!(body["phone_numbers"], json!([]));
        assert_eq!(body["addresses"], json!([]));
        assert_eq!(body["website_addresses"], json!([]));
        assert_eq!(body["social_media_addresses"], json!([]));
        // Email is always present, even when blank.
        assert_eq!(body["email_addresses"][0]["type"], "personal");
    }

    #[test]
    fn test_non_ascii_values_survive_serialization_byte_identical() {
        let sub = submission("José", "");
        let serialized = serde_json::to_string(&sub.to_candidate("j1")).unwrap();
        assert!(serialized.contains("José"));

        let round_trip: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(round_trip["first_name"], "José");
    }

    fn multipart_request(parts: &[(&str, &str)], resume: Option<(&str, &[u8])>) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = String::new();
        for (name, value) in parts {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        let mut raw = body.into_bytes();
        if let Some((filename, bytes)) = resume {
            raw.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            raw.extend_from_slice(bytes);
            raw.extend_from_slice(b"\r\n");
        }
        raw.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(raw))
            .unwrap()
    }

    #[tokio::test]
    async fn test_from_multipart_absent_fields_are_empty_not_errors() {
        let request = multipart_request(&[("email", "ada@x.com")], None);
        let multipart = Multipart::from_request(request, &()).await.unwrap();

        let sub = ApplicationSubmission::from_multipart(multipart)
            .await
            .unwrap();

        assert_eq!(sub.email, "ada@x.com");
        assert_eq!(sub.first_name, "");
        assert_eq!(sub.phone, "");
        assert!(sub.resume.is_none());
    }

    #[tokio::test]
    async fn test_from_multipart_extracts_resume_file() {
        let request = multipart_request(
            &[("firstName", "Ada")],
            Some(("ada-cv.pdf", b"%PDF-1.4 fake".as_slice())),
        );
        let multipart = Multipart::from_request(request, &()).await.unwrap();

        let sub = ApplicationSubmission::from_multipart(multipart)
            .await
            .unwrap();

        let resume = sub.resume.expect("resume part should be captured");
        assert_eq!(resume.filename, "ada-cv.pdf");
        assert_eq!(resume.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(&resume.bytes[..], b"%PDF-1.4 fake");
    }
}
