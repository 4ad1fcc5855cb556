use hospital_types::TextError;

/// Which collection a failed lookup was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Physician,
    Patient,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Physician => write!(f, "physician"),
            EntityKind::Patient => write!(f, "patient"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("identification {0} is already registered")]
    DuplicateIdentification(String),
    #[error("license {0} is already registered")]
    DuplicateLicense(String),
    #[error("no {entity} with identification {identification}")]
    NotFound {
        entity: EntityKind,
        identification: String,
    },
    #[error("physician {0} is the last physician and cannot be removed")]
    LastPhysician(String),

    #[error("invalid configuration value: {0}")]
    Text(#[from] TextError),
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

impl RegistryError {
    pub(crate) fn physician_not_found(identification: &str) -> Self {
        RegistryError::NotFound {
            entity: EntityKind::Physician,
            identification: identification.to_string(),
        }
    }

    pub(crate) fn patient_not_found(identification: &str) -> Self {
        RegistryError::NotFound {
            entity: EntityKind::Patient,
            identification: identification.to_string(),
        }
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
