use serde::{Deserialize, Deserializer, Serialize};

pub const STATUS_SUCCESS: &str = "success";

/// Laptop preferences posted by the caller.
///
/// Every field is optional; absent or `null` fields decode to zero or empty.
/// Keys also match in their capitalized and upper-case spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaptopRecommendationRequest {
    #[serde(alias = "Budget", alias = "BUDGET", deserialize_with = "null_as_default")]
    pub budget: i64,
    #[serde(alias = "Purpose", alias = "PURPOSE", deserialize_with = "null_as_default")]
    pub purpose: String,
    #[serde(alias = "Brand", alias = "BRAND", deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(alias = "Ram", alias = "RAM", deserialize_with = "null_as_default")]
    pub ram: String,
    #[serde(alias = "Cpu", alias = "CPU", deserialize_with = "null_as_default")]
    pub cpu: String,
    #[serde(
        alias = "Screen_size",
        alias = "Screen_Size",
        alias = "SCREEN_SIZE",
        deserialize_with = "null_as_default"
    )]
    pub screen_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaptopRecommendationResponse {
    pub status: String,
    pub data: String,
}

impl LaptopRecommendationResponse {
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: data.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let request: LaptopRecommendationRequest = serde_json::from_str(
            r#"{"budget":1000000,"purpose":"gaming","brand":"Asus","ram":"16GB","cpu":"i7","screen_size":"15 inch"}"#,
        )
        .unwrap();

        assert_eq!(request.budget, 1_000_000);
        assert_eq!(request.purpose, "gaming");
        assert_eq!(request.brand, "Asus");
        assert_eq!(request.ram, "16GB");
        assert_eq!(request.cpu, "i7");
        assert_eq!(request.screen_size, "15 inch");
    }

    #[test]
    fn missing_and_null_fields_default() {
        let request: LaptopRecommendationRequest =
            serde_json::from_str(r#"{"purpose":"office","brand":null}"#).unwrap();

        assert_eq!(request.budget, 0);
        assert_eq!(request.purpose, "office");
        assert_eq!(request.brand, "");
        assert_eq!(request.screen_size, "");
    }

    #[test]
    fn budget_as_string_is_rejected() {
        let result =
            serde_json::from_str::<LaptopRecommendationRequest>(r#"{"budget":"1000000"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn capitalized_keys_are_matched() {
        let request: LaptopRecommendationRequest = serde_json::from_str(
            r#"{"Budget":5,"Purpose":"gaming","BRAND":"Acer","RAM":"8GB","CPU":"Ryzen 5","Screen_Size":"14 inch"}"#,
        )
        .unwrap();

        assert_eq!(request.budget, 5);
        assert_eq!(request.purpose, "gaming");
        assert_eq!(request.brand, "Acer");
        assert_eq!(request.ram, "8GB");
        assert_eq!(request.cpu, "Ryzen 5");
        assert_eq!(request.screen_size, "14 inch");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: LaptopRecommendationRequest =
            serde_json::from_str(r#"{"budget":5,"color":"black"}"#).unwrap();
        assert_eq!(request.budget, 5);
    }

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(LaptopRecommendationResponse::success("Asus ROG")).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "success", "data": "Asus ROG" }));
    }
}
