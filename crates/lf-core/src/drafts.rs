//! Validated construction of entities from raw form values.
//!
//! A draft holds the strings a front end collected. Converting it into an
//! entity validates every field and fails with [`CoreError::Validation`]
//! naming the first offending field; nothing is constructed on failure.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Claim, ContactMessage, Item};
use crate::enums::{ClaimStatus, ItemStatus};
use crate::errors::CoreError;

/// Form values for reporting a found item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    /// `YYYY-MM-DD`.
    pub date_found: String,
    pub finder_name: String,
    pub finder_contact: String,
    /// Already-encoded `data:` URL, if a photo was attached.
    pub photo: Option<String>,
}

impl ItemDraft {
    /// Validate the draft against `today` (UTC) and return the parsed
    /// found-date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank required field, an
    /// unparseable or future date, or a photo that is not a `data:` URL.
    pub fn validate(&self, today: NaiveDate) -> Result<NaiveDate, CoreError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        require("description", &self.description)?;
        require("location", &self.location)?;
        let date_found = parse_date_found(&self.date_found, today)?;
        require("finderName", &self.finder_name)?;
        require("finderContact", &self.finder_contact)?;
        if let Some(photo) = &self.photo {
            if !photo.starts_with("data:") {
                return Err(CoreError::invalid("photo", "must be a data: URL"));
            }
        }
        Ok(date_found)
    }

    /// Build a `Pending` item reported at `now`.
    ///
    /// `next_id` is only called once validation has passed.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`].
    pub fn into_item(
        self,
        now: DateTime<Utc>,
        next_id: impl FnOnce() -> String,
    ) -> Result<Item, CoreError> {
        let date_found = self.validate(now.date_naive())?;
        Ok(Item {
            id: next_id(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            date_found,
            finder_name: self.finder_name.trim().to_string(),
            finder_contact: self.finder_contact.trim().to_string(),
            photo: self.photo,
            status: ItemStatus::Pending,
            date_reported: now,
            claims: Vec::new(),
        })
    }
}

/// Form values for claiming an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDraft {
    pub claimant_name: String,
    pub claimant_contact: String,
    /// Why the claimant believes the item is theirs.
    pub description: String,
}

impl ClaimDraft {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("claimantName", &self.claimant_name)?;
        require("claimantContact", &self.claimant_contact)?;
        require("description", &self.description)?;
        Ok(())
    }

    /// Build a `Pending` claim against `item_id`. The item is not checked
    /// for existence here.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`].
    pub fn into_claim(
        self,
        item_id: &str,
        now: DateTime<Utc>,
        next_id: impl FnOnce() -> String,
    ) -> Result<Claim, CoreError> {
        self.validate()?;
        Ok(Claim {
            id: next_id(),
            item_id: item_id.to_string(),
            claimant_name: self.claimant_name.trim().to_string(),
            claimant_contact: self.claimant_contact.trim().to_string(),
            description: self.description.trim().to_string(),
            date_submitted: now,
            status: ClaimStatus::Pending,
        })
    }
}

/// Form values for the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank field or a malformed email.
    pub fn into_message(self, now: DateTime<Utc>) -> Result<ContactMessage, CoreError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)?;
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(CoreError::invalid("email", "must be an email address")),
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(field, "is required"));
    }
    Ok(())
}

fn parse_date_found(raw: &str, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    require("dateFound", raw)?;
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::invalid("dateFound", format!("must be YYYY-MM-DD: {e}")))?;
    if date > today {
        return Err(CoreError::invalid(
            "dateFound",
            format!("{date} is in the future"),
        ));
    }
    Ok(date)
}
