use serde::{Deserialize, Serialize};

// Reference record from the financial-companies service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}
