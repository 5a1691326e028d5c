//! Client-side pieces of the logged hours system: a typed HTTP client for the
//! API and the mapping of identity-provider accounts onto local claims.

pub mod account;
pub mod client;
pub mod dto;

pub use account::{AccountClaimsFactory, Claim, ClaimsIdentity, ClaimsPrincipal, UserAccount};
pub use client::{AccessTokenProvider, ClientError, HoursClient, StaticTokenProvider};
pub use dto::{
    FilterType, HealthStatus, InReviewEntry, LoggedHourEntry, MarkReviewedRequest, ReportRequest,
    SubmitHoursRequest, WorkerEntry,
};
