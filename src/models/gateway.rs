//! On-premises data gateways

use super::{id_field, str_field};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub gateway_type: Option<String>,
    pub gateway_annotation: Option<String>,
    pub gateway_status: Option<String>,
    pub public_key: Option<GatewayPublicKey>,
}

/// RSA key used to encrypt data source credentials for the gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayPublicKey {
    pub exponent: Option<String>,
    pub modulus: Option<String>,
}

impl From<&Value> for GatewayPublicKey {
    fn from(value: &Value) -> Self {
        Self {
            exponent: str_field(value, "exponent"),
            modulus: str_field(value, "modulus"),
        }
    }
}

impl From<&Value> for Gateway {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            name: str_field(value, "name"),
            gateway_type: str_field(value, "type"),
            gateway_annotation: str_field(value, "gatewayAnnotation"),
            gateway_status: str_field(value, "gatewayStatus"),
            public_key: value
                .get("publicKey")
                .filter(|v| v.is_object())
                .map(GatewayPublicKey::from),
        }
    }
}

entity!(Gateway, "gateway");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gateway_from_raw() {
        let gateway = Gateway::from_raw(&json!({
            "id": "1f69e798-5852-4fdd-ab01-33bb14b6e934",
            "name": "My_Sample_Gateway",
            "type": "Resource",
            "publicKey": {
                "exponent": "AQAB",
                "modulus": "o6j2....cLk="
            }
        }));

        assert_eq!(gateway.name.as_deref(), Some("My_Sample_Gateway"));
        assert_eq!(gateway.gateway_type.as_deref(), Some("Resource"));
        let key = gateway.public_key.unwrap();
        assert_eq!(key.exponent.as_deref(), Some("AQAB"));
        assert_eq!(key.modulus.as_deref(), Some("o6j2....cLk="));
        assert_eq!(gateway.gateway_status, None);
    }

    #[test]
    fn test_gateway_without_public_key() {
        let gateway = Gateway::from_raw(&json!({"id": "1f69e798", "publicKey": "AQAB"}));
        assert_eq!(gateway.public_key, None);
    }
}
