use async_trait::async_trait;
use mockall::mock;
use roombooker_core::{
    models::{
        meeting::{Meeting, NewMeeting},
        room::Room,
    },
    store::{BookingStore, StorageProvider},
};

// Mock storage for testing handlers without Postgres
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn find_meeting(&mut self, mtg_id: i32) -> eyre::Result<Option<Meeting>>;

        async fn conflicting_meetings(
            &mut self,
            room_id: i32,
            date: &str,
            start: &str,
            end: &str,
        ) -> eyre::Result<Vec<Meeting>>;

        async fn available_rooms(
            &mut self,
            date: &str,
            start: &str,
            end: &str,
        ) -> eyre::Result<Vec<Room>>;

        async fn meetings_for_room(&mut self, room_id: i32) -> eyre::Result<Vec<Meeting>>;

        async fn all_meetings(&mut self) -> eyre::Result<Vec<Meeting>>;

        async fn all_rooms(&mut self) -> eyre::Result<Vec<Room>>;

        async fn create_meeting(&mut self, meeting: &NewMeeting) -> eyre::Result<Option<Meeting>>;

        async fn delete_meeting(&mut self, mtg_id: i32) -> eyre::Result<u64>;
    }
}

mock! {
    pub StorageProvider {}

    #[async_trait]
    impl StorageProvider for StorageProvider {
        async fn acquire(&self) -> eyre::Result<Box<dyn BookingStore>>;
    }
}
