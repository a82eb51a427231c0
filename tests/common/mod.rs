//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use dog_training_assistant::models::{PriceRange, ServiceProvider, ServiceType};
use tempfile::TempDir;

/// Command for the built binary, pointed at an isolated config file
pub fn cli(config: &ConfigFile) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dog-training-assistant"));
    cmd.arg("--config").arg(config.path()).env_remove("DOG_TRAINING_ASSISTANT_LOG");
    cmd
}

/// Config file in a temp directory, empty unless `with_contents` is called
pub struct ConfigFile {
    temp_dir: TempDir,
    path: PathBuf,
}

impl ConfigFile {
    pub fn new() -> Self {
        let config = Self::missing();
        fs::write(&config.path, "").expect("Failed to write config file");
        config
    }

    /// Path inside the temp directory with no file behind it
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        Self { temp_dir, path }
    }

    pub fn with_contents(self, contents: &str) -> Self {
        fs::write(&self.path, contents).expect("Failed to write config file");
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for synthetic provider records
pub struct ProviderBuilder {
    provider: ServiceProvider,
}

impl ProviderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            provider: ServiceProvider {
                id: id.to_string(),
                name: format!("Provider {}", id),
                service_type: ServiceType::DogTraining,
                description: "Friendly local service".to_string(),
                location: "Town Center".to_string(),
                distance: 1.0,
                phone: "(555) 000-0000".to_string(),
                email: format!("hello{}@example.com", id),
                website: None,
                rating: 4.0,
                review_count: 10,
                price_range: PriceRange::Moderate,
                certifications: Vec::new(),
                availability: "Daily".to_string(),
                specialties: Vec::new(),
                years_experience: 3,
                reviews: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.provider.name = name.to_string();
        self
    }

    pub fn service_type(mut self, service_type: ServiceType) -> Self {
        self.provider.service_type = service_type;
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.provider.distance = distance;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.provider.rating = rating;
        self
    }

    pub fn specialty(mut self, specialty: &str) -> Self {
        self.provider.specialties.push(specialty.to_string());
        self
    }

    pub fn website(mut self, website: &str) -> Self {
        self.provider.website = Some(website.to_string());
        self
    }

    pub fn build(self) -> ServiceProvider {
        self.provider
    }
}

/// `n` providers with varied distances, ratings and categories
pub fn generate_providers(n: usize) -> Vec<ServiceProvider> {
    (0..n)
        .map(|i| {
            ProviderBuilder::new(&i.to_string())
                .service_type(ServiceType::ALL[i % ServiceType::ALL.len()])
                .distance(((i * 37) % 100) as f64 / 10.0)
                .rating(((i * 13) % 50) as f64 / 10.0)
                .build()
        })
        .collect()
}

pub fn ids(providers: &[ServiceProvider]) -> Vec<&str> {
    providers.iter().map(|p| p.id.as_str()).collect()
}
