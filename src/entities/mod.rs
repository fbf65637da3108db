pub mod booking;
pub mod booking_package;
pub mod booking_sub_service;
pub mod coupon;
pub mod garage;
pub mod garage_automobile_make;
pub mod garage_automobile_model;
pub mod garage_package;
pub mod garage_service;
pub mod garage_sub_service;
pub mod garage_time;
pub mod job;
pub mod job_bid;
pub mod notification;
pub mod notification_template;
pub mod pre_booking;
pub mod sub_service_price;
pub mod user;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Related;

    // Every has_many on a parent needs the reverse Related impl on the child.
    #[test]
    fn child_entities_relate_back_to_their_parents() {
        let _ = <garage_automobile_model::Entity as Related<garage_automobile_make::Entity>>::to();
        let _ = <sub_service_price::Entity as Related<garage_sub_service::Entity>>::to();
        let _ = <booking::Entity as Related<user::Entity>>::to();
        let _ = <booking_sub_service::Entity as Related<booking::Entity>>::to();
        let _ = <booking_package::Entity as Related<booking::Entity>>::to();
        let _ = <job_bid::Entity as Related<pre_booking::Entity>>::to();
    }
}
