use crate::entities::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields for a new hero. `created_at` and `id` are assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewHero {
    pub codename: String,
    pub real_name: Option<String>,
    pub primary_power: String,
    pub city: String,
    pub backstory: Option<String>,
}

impl NewHero {
    pub fn new(
        codename: impl Into<String>,
        primary_power: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        NewHero {
            codename: codename.into(),
            primary_power: primary_power.into(),
            city: city.into(),
            ..Default::default()
        }
    }

    pub fn real_name(mut self, real_name: impl Into<String>) -> Self {
        self.real_name = Some(real_name.into());
        self
    }

    pub fn backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = Some(backstory.into());
        self
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeroResponse {
    pub id: i64,
    pub codename: String,
    pub real_name: Option<String>,
    pub primary_power: String,
    pub city: String,
    pub backstory: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<hero::Model> for HeroResponse {
    fn from(hero: hero::Model) -> Self {
        HeroResponse {
            id: hero.id,
            codename: hero.codename,
            real_name: hero.real_name,
            primary_power: hero.primary_power,
            city: hero.city,
            backstory: hero.backstory,
            created_at: hero.created_at,
        }
    }
}
