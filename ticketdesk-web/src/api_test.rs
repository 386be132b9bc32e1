//! Tests for the API client functionality
//!
//! Requests are built but never sent, so these run without a server and
//! check paths, query strings and bodies against the REST contract.

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use crate::api::{TicketDeskClient, decode_body};
    use crate::error::AppError;
    use reqwest::Method;
    use shared::models::{
        Attachment, CreateTicketRequest, LoginRequest, Ticket, TicketPriority, TicketStatus,
    };

    const BASE: &str = "http://localhost:5000/api";

    fn client() -> TicketDeskClient {
        TicketDeskClient::new("http://localhost:5000/api/")
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("request should carry a buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn ticket_listing_paths() {
        let all = client().list_tickets_request().build().unwrap();
        assert_eq!(all.method(), Method::GET);
        assert_eq!(all.url().as_str(), format!("{BASE}/tickets"));

        let mine = client().list_user_tickets_request("17").build().unwrap();
        assert_eq!(mine.url().as_str(), format!("{BASE}/tickets/user/17"));

        let one = client().get_ticket_request(42).build().unwrap();
        assert_eq!(one.url().as_str(), format!("{BASE}/tickets/42"));
    }

    #[test]
    fn status_update_sends_assignee_when_present() {
        let request = client()
            .update_status_request(42, TicketStatus::InProgress, Some(7))
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/tickets/42/status");
        assert_eq!(request.url().query(), Some("status=in_progress&assignedTo=7"));
    }

    #[test]
    fn status_update_omits_missing_assignee() {
        let request = client()
            .update_status_request(42, TicketStatus::Resolved, None)
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("status=resolved"));
    }

    #[test]
    fn status_update_keeps_assignee_zero() {
        let request = client()
            .update_status_request(1, TicketStatus::Open, Some(0))
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("status=open&assignedTo=0"));
    }

    #[test]
    fn delete_sends_id_array_body() {
        let request = client().delete_tickets_request(&[42, 43]).build().unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().as_str(), format!("{BASE}/tickets"));
        assert_eq!(body_json(&request), serde_json::json!([42, 43]));
    }

    #[test]
    fn create_ticket_posts_pascal_case_body() {
        let payload = CreateTicketRequest {
            title: "Laptop will not boot".to_string(),
            description: "Blue screen".to_string(),
            priority: TicketPriority::High,
            created_by: Some(3),
            assigned_to: None,
            category_id: None,
        };
        let request = client().create_ticket_request(&payload).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        let body = body_json(&request);
        assert_eq!(body["Title"], "Laptop will not boot");
        assert_eq!(body["Priority"], "High");
        assert_eq!(body["CreatedBy"], 3);
        assert!(body["AssignedTo"].is_null());
    }

    #[test]
    fn attachment_and_user_paths() {
        let attachment = Attachment {
            id: None,
            ticket_id: None,
            file_name: "screenshot.png".to_string(),
            file_url: None,
            uploaded_at: None,
        };
        let add = client().add_attachment_request(9, &attachment).build().unwrap();
        assert_eq!(add.method(), Method::POST);
        assert_eq!(add.url().as_str(), format!("{BASE}/tickets/9/attachments"));

        let list = client().list_attachments_request(9).build().unwrap();
        assert_eq!(list.url().as_str(), format!("{BASE}/tickets/9/attachments"));

        let users = client().list_users_request().build().unwrap();
        assert_eq!(users.url().as_str(), format!("{BASE}/users"));

        let user = client().get_user_request(5).build().unwrap();
        assert_eq!(user.url().as_str(), format!("{BASE}/users/5"));
    }

    #[test]
    fn login_posts_credentials() {
        let request = client()
            .login_request(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), format!("{BASE}/auth/login"));
        assert_eq!(body_json(&request)["email"], "ada@example.com");
    }

    #[test]
    fn malformed_bodies_are_parse_errors() {
        let result = decode_body::<Vec<Ticket>>(r#"{"tickets": "nope"}"#);
        assert!(matches!(result, Err(AppError::Parse(_))));

        let tickets = decode_body::<Vec<Ticket>>(r#"[{"id": 1, "title": "a"}]"#).unwrap();
        assert_eq!(tickets.len(), 1);
    }
}
