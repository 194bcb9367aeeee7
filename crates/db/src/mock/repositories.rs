use chrono::{DateTime, Utc};
use fitbook_core::errors::BookingResult;
use mockall::mock;

use crate::models::{DbBooking, DbBookingWithClass, DbFitnessClass};

// Mock repositories for testing. String parameters are 'static so tests can
// match them with mockall predicates.
mock! {
    pub FitnessClassRepo {
        pub async fn create_fitness_class(
            &self,
            name: &'static str,
            instructor: &'static str,
            start_time: DateTime<Utc>,
            total_slots: i32,
        ) -> BookingResult<DbFitnessClass>;

        pub async fn get_upcoming_classes(
            &self,
            now: DateTime<Utc>,
        ) -> BookingResult<Vec<DbFitnessClass>>;

        pub async fn get_class_by_id(
            &self,
            id: i64,
        ) -> BookingResult<Option<DbFitnessClass>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            class_id: i64,
            client_name: &'static str,
            client_email: &'static str,
            now: DateTime<Utc>,
        ) -> BookingResult<(DbBooking, DbFitnessClass)>;

        pub async fn get_bookings_by_email(
            &self,
            client_email: &'static str,
        ) -> BookingResult<Vec<DbBookingWithClass>>;
    }
}
