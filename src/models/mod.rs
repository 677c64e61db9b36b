mod calculation;
mod welcome;

pub use calculation::{
    CalculationEvent, CalculationRecord, CalculationRequest, CalculationResponse,
    CalculationResult,
};
pub use welcome::{Endpoints, HealthResponse, WelcomeResponse};
