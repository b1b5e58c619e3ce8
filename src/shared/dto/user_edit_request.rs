use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEditRequest {
    pub email: Option<String>,
    pub display_name: Option<String>,
}
