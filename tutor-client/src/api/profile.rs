//! Business profile API

use shared::models::{BusinessProfile, BusinessProfileUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Get the issuer profile (404 until one is saved)
    pub async fn business_profile(&self) -> ClientResult<BusinessProfile> {
        self.get("/api/business-profile/").await
    }

    /// Replace the issuer profile
    pub async fn save_business_profile(
        &self,
        profile: &BusinessProfileUpdate,
    ) -> ClientResult<BusinessProfile> {
        self.put("/api/business-profile/", profile).await
    }
}
