pub mod booking;
pub mod route;
pub mod slot;

pub use booking::{
    BookingDraft, BookingRequest, ConfirmedBooking, ContactDetails, LoginForm, Step, Visit,
};
pub use route::{GeoPoint, RecommendRouteInput, RecommendRouteOutput, RouteRequest};
pub use slot::{SlotAvailability, SlotTime};
