use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Payload of the service root endpoint.
#[derive(Serialize, Debug)]
pub struct RootInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// Acknowledgment body for operations without a record to return.
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn root_info_serializes_flat() {
        let info = RootInfo { message: "Cheque App API", status: "running", version: "1.0.0" };
        let v = serde_json::to_value(&info).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Cheque App API", "status": "running", "version": "1.0.0"}));
    }

    #[test]
    fn message_response_has_single_field() {
        let v = serde_json::to_value(MessageResponse::new("done")).unwrap();
        assert_eq!(v, serde_json::json!({"message": "done"}));
    }
}
