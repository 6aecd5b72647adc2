//! Bioskop (cinema) Model

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Message returned when name or location is blank after trimming
pub const EMPTY_FIELDS_MESSAGE: &str = "nama dan lokasi tidak boleh kosong";

/// Cinema entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bioskop {
    pub id: i64,
    pub nama: String,
    pub lokasi: String,
    pub rating: f32,
}

impl Bioskop {
    /// Build the entity from an id and an already-normalized payload
    pub fn from_input(id: i64, input: BioskopInput) -> Self {
        Self {
            id,
            nama: input.nama,
            lokasi: input.lokasi,
            rating: input.rating,
        }
    }
}

/// Create / update payload
///
/// Accepts `nama`/`lokasi` as well as the English `name`/`location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioskopInput {
    #[serde(alias = "name")]
    pub nama: String,
    #[serde(alias = "location")]
    pub lokasi: String,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: f32,
}

/// `null` reads as 0; values that do not fit a finite `f32` are rejected.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(0.0);
    };
    let rating = value as f32;
    if !rating.is_finite() {
        return Err(D::Error::custom(format!(
            "rating: {value} is out of range for a 32-bit float"
        )));
    }
    Ok(rating)
}

impl BioskopInput {
    pub fn new(nama: impl Into<String>, lokasi: impl Into<String>, rating: f32) -> Self {
        Self {
            nama: nama.into(),
            lokasi: lokasi.into(),
            rating,
        }
    }

    /// Trim name and location; both must be non-empty afterwards.
    pub fn normalized(self) -> AppResult<Self> {
        let nama = self.nama.trim();
        let lokasi = self.lokasi.trim();
        if nama.is_empty() || lokasi.is_empty() {
            return Err(AppError::validation(EMPTY_FIELDS_MESSAGE));
        }
        Ok(Self {
            nama: nama.to_string(),
            lokasi: lokasi.to_string(),
            rating: self.rating,
        })
    }
}

/// Confirmation body for a successful update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioskopUpdated {
    pub message: String,
    pub data: Bioskop,
}

impl BioskopUpdated {
    pub fn new(data: Bioskop) -> Self {
        Self {
            message: "update success".to_string(),
            data,
        }
    }
}

/// Confirmation body for a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioskopDeleted {
    pub message: String,
    pub id: i64,
}

impl BioskopDeleted {
    pub fn new(id: i64) -> Self {
        Self {
            message: "delete success".to_string(),
            id,
        }
    }
}
