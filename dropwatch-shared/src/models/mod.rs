pub mod auth;
pub mod errors;
pub mod prediction;
pub mod user;

pub use auth::{ForgotPasswordRequest, ForgotPasswordResponse, MeResponse, ResetPasswordRequest};
pub use errors::ErrorResponse;
pub use prediction::{
    PredictionOutcome, PredictionResult, StudentFeatures, Submission, SubmissionsResponse,
};
pub use user::{Role, UserId, UserRecord};
