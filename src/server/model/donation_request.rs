//! Donation request domain models and parameters.
//!
//! Holds the request status state machine along with the parameter types consumed by
//! the lifecycle operations (create, edit, claim, close) and by the listing engine.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::donation_request::{
        CreateDonationRequestDto, DonationRequestDto, PaginatedDonationRequestsDto,
        UpdateDonationRequestDto,
    },
    server::{
        error::AppError,
        model::{pagination::Pagination, user::User, UnknownVariant},
        util::{
            normalize::normalize_blood_group,
            parse::{non_blank, parse_input, parse_stored},
        },
    },
};

/// Lifecycle status of a donation request.
///
/// Requests start `Pending`, move to `InProgress` when a donor claims them and finish
/// as `Done` or `Canceled`. Terminal states have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DonationStatus {
    Pending,
    InProgress,
    Done,
    Canceled,
}

/// Every permitted `(from, to)` status change.
const TRANSITIONS: &[(DonationStatus, DonationStatus)] = &[
    (DonationStatus::Pending, DonationStatus::InProgress),
    (DonationStatus::Pending, DonationStatus::Canceled),
    (DonationStatus::InProgress, DonationStatus::Done),
    (DonationStatus::InProgress, DonationStatus::Canceled),
];

impl DonationStatus {
    pub const ALL: [DonationStatus; 4] = [
        DonationStatus::Pending,
        DonationStatus::InProgress,
        DonationStatus::Done,
        DonationStatus::Canceled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::InProgress => "inprogress",
            DonationStatus::Done => "done",
            DonationStatus::Canceled => "canceled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, DonationStatus::Done | DonationStatus::Canceled)
    }

    pub fn can_transition_to(self, target: DonationStatus) -> bool {
        TRANSITIONS.contains(&(self, target))
    }

    /// Statuses from which `target` can be reached in one step.
    pub fn sources_for(target: DonationStatus) -> Vec<DonationStatus> {
        TRANSITIONS
            .iter()
            .filter(|(_, to)| *to == target)
            .map(|(from, _)| *from)
            .collect()
    }
}

impl FromStr for DonationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Donor assigned to a request when it is claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedDonor {
    pub name: String,
    pub email: String,
    pub donated_at: DateTime<Utc>,
}

/// A request for blood on behalf of a recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRequest {
    pub id: i32,
    pub requester_email: String,
    pub requester_name: String,
    pub recipient_name: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: String,
    pub district: String,
    pub upazila: String,
    pub donation_date: String,
    pub donation_time: String,
    pub request_message: String,
    pub status: DonationStatus,
    /// Present once the request has left `Pending` through a claim.
    pub donor: Option<AssignedDonor>,
    pub created_at: DateTime<Utc>,
}

impl DonationRequest {
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.requester_email == email
    }

    pub fn into_dto(self) -> DonationRequestDto {
        let (donor_name, donor_email, donated_at) = match self.donor {
            Some(donor) => (Some(donor.name), Some(donor.email), Some(donor.donated_at)),
            None => (None, None, None),
        };

        DonationRequestDto {
            id: self.id,
            requester_email: self.requester_email,
            requester_name: self.requester_name,
            recipient_name: self.recipient_name,
            hospital_name: self.hospital_name,
            full_address: self.full_address,
            blood_group: self.blood_group,
            district: self.district,
            upazila: self.upazila,
            donation_date: self.donation_date,
            donation_time: self.donation_time,
            request_message: self.request_message,
            status: self.status.to_string(),
            donor_name,
            donor_email,
            donated_at,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a donation request at the repository boundary.
    ///
    /// Donor fields are only surfaced when all three were written, which the claim
    /// update guarantees.
    ///
    /// # Returns
    /// - `Ok(DonationRequest)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored status is not a known value
    pub fn from_entity(entity: entity::donation_request::Model) -> Result<Self, AppError> {
        let status = parse_stored::<DonationStatus>("donation status", entity.status)?;

        let donor = match (entity.donor_name, entity.donor_email, entity.donated_at) {
            (Some(name), Some(email), Some(donated_at)) => Some(AssignedDonor {
                name,
                email,
                donated_at,
            }),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            requester_email: entity.requester_email,
            requester_name: entity.requester_name,
            recipient_name: entity.recipient_name,
            hospital_name: entity.hospital_name,
            full_address: entity.full_address,
            blood_group: entity.blood_group,
            district: entity.district,
            upazila: entity.upazila,
            donation_date: entity.donation_date,
            donation_time: entity.donation_time,
            request_message: entity.request_message,
            status,
            donor,
            created_at: entity.created_at,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value)
}

/// Parameters for creating a donation request.
///
/// The requester is always the authenticated caller; there is no way to create a request
/// on someone else's behalf.
#[derive(Debug, Clone)]
pub struct CreateDonationRequestParam {
    pub requester_email: String,
    pub requester_name: String,
    pub recipient_name: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: String,
    pub district: String,
    pub upazila: String,
    pub donation_date: String,
    pub donation_time: String,
    pub request_message: String,
}

impl CreateDonationRequestParam {
    /// Builds creation parameters for `requester` from a request body.
    ///
    /// # Returns
    /// - `Ok(CreateDonationRequestParam)` - Trimmed and normalized parameters
    /// - `Err(AppError::BadRequest)` - A required descriptive field is blank
    pub fn from_dto(requester: &User, dto: CreateDonationRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            requester_email: requester.email.clone(),
            requester_name: requester.name.clone(),
            recipient_name: required("recipientName", dto.recipient_name)?,
            hospital_name: required("hospitalName", dto.hospital_name)?,
            full_address: required("fullAddress", dto.full_address)?,
            blood_group: normalize_blood_group(&required("bloodGroup", dto.blood_group)?),
            district: required("district", dto.district)?,
            upazila: required("upazila", dto.upazila)?,
            donation_date: required("donationDate", dto.donation_date)?,
            donation_time: required("donationTime", dto.donation_time)?,
            request_message: dto.request_message.trim().to_string(),
        })
    }
}

/// Descriptive fields an owner may edit while a request is pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDonationRequestParam {
    pub recipient_name: Option<String>,
    pub hospital_name: Option<String>,
    pub full_address: Option<String>,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub donation_date: Option<String>,
    pub donation_time: Option<String>,
    pub request_message: Option<String>,
}

impl UpdateDonationRequestParam {
    /// Keeps the non-blank editable fields. The message may be cleared.
    pub fn from_dto(dto: UpdateDonationRequestDto) -> Self {
        Self {
            recipient_name: non_blank(dto.recipient_name),
            hospital_name: non_blank(dto.hospital_name),
            full_address: non_blank(dto.full_address),
            blood_group: non_blank(dto.blood_group).map(|g| normalize_blood_group(&g)),
            district: non_blank(dto.district),
            upazila: non_blank(dto.upazila),
            donation_date: non_blank(dto.donation_date),
            donation_time: non_blank(dto.donation_time),
            request_message: dto.request_message.map(|m| m.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Parameters for claiming a pending request.
#[derive(Debug, Clone)]
pub struct ClaimDonationParam {
    pub id: i32,
    pub donor_name: String,
    pub donor_email: String,
}

/// Parameters for closing out a request as done or canceled.
#[derive(Debug, Clone)]
pub struct CloseDonationParam {
    pub id: i32,
    pub requester_email: String,
    pub target: DonationStatus,
}

impl CloseDonationParam {
    /// Parses and validates the requested final status.
    ///
    /// # Returns
    /// - `Ok(CloseDonationParam)` - Target is `done` or `canceled`
    /// - `Err(AppError::BadRequest)` - Target is unknown or not a final status
    pub fn new(id: i32, requester_email: String, status: &str) -> Result<Self, AppError> {
        let target = parse_input::<DonationStatus>("status", status)?;
        if !target.is_terminal() {
            return Err(AppError::BadRequest(
                "Status must be either 'done' or 'canceled'".to_string(),
            ));
        }

        Ok(Self {
            id,
            requester_email,
            target,
        })
    }
}

/// Filters for the donation request listing. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationRequestFilter {
    pub status: Option<DonationStatus>,
    /// Exact match on the canonical blood group.
    pub blood_group: Option<String>,
    /// Case-insensitive substring match.
    pub district: Option<String>,
    /// Exact match on the requester email.
    pub requester_email: Option<String>,
}

impl DonationRequestFilter {
    /// Builds a filter from raw query values, ignoring blank ones.
    ///
    /// # Returns
    /// - `Ok(DonationRequestFilter)` - Normalized filter
    /// - `Err(AppError::BadRequest)` - Status is not a known value
    pub fn from_query(
        status: Option<String>,
        blood_group: Option<String>,
        district: Option<String>,
    ) -> Result<Self, AppError> {
        let status = match non_blank(status) {
            Some(status) => Some(parse_input::<DonationStatus>("status", &status)?),
            None => None,
        };

        Ok(Self {
            status,
            blood_group: blood_group
                .map(|g| normalize_blood_group(&g))
                .filter(|g| !g.is_empty()),
            district: non_blank(district),
            requester_email: None,
        })
    }

    pub fn pending() -> Self {
        Self {
            status: Some(DonationStatus::Pending),
            ..Default::default()
        }
    }
}

/// Parameters for listing the caller's own requests.
#[derive(Debug, Clone)]
pub struct MyRequestsParam {
    pub requester_email: String,
    pub status: Option<DonationStatus>,
    pub limit: Option<u64>,
}

/// Page of donation requests with its pagination summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDonationRequests {
    pub requests: Vec<DonationRequest>,
    pub pagination: Pagination,
}

impl PaginatedDonationRequests {
    pub fn into_dto(self) -> PaginatedDonationRequestsDto {
        PaginatedDonationRequestsDto {
            requests: self
                .requests
                .into_iter()
                .map(DonationRequest::into_dto)
                .collect(),
            pagination: self.pagination.into_dto(),
        }
    }
}
