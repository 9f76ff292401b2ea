use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donation_request")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    #[sea_orm(column_type = "Text")]
    pub request_message: String,
    pub status: String,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub donated_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
