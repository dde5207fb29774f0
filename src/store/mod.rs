use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Roster of all activities, keyed by activity name.
///
/// The handle is cheap to clone; every clone shares the same map. Mutations go
/// through the lock, so concurrent signup/unregister requests for the same
/// activity cannot lose updates.
#[derive(Clone)]
pub struct ActivityStore {
    activities: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
        }
    }

    /// The fixed roster the server starts with. No endpoint creates or
    /// deletes activities, only their participant lists change.
    pub fn with_seed_data() -> Self {
        let mut activities = BTreeMap::new();
        activities.insert(
            "Chess Club".to_string(),
            seed(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        activities.insert(
            "Programming Class".to_string(),
            seed(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        activities.insert(
            "Gym Class".to_string(),
            seed(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        activities.insert(
            "Basketball".to_string(),
            seed(
                "Practice drills and compete in interschool basketball games",
                "Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &[],
            ),
        );
        activities.insert(
            "Soccer".to_string(),
            seed(
                "Join the school soccer team and train for matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &[],
            ),
        );
        activities.insert(
            "Art Club".to_string(),
            seed(
                "Explore painting, drawing and other visual arts",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu"],
            ),
        );
        activities.insert(
            "Drama Club".to_string(),
            seed(
                "Act, direct and produce the school plays",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        );
        activities.insert(
            "Math Club".to_string(),
            seed(
                "Problem solving and math competition preparation",
                "Tuesdays, 7:15 AM - 8:00 AM",
                10,
                &["james@mergington.edu"],
            ),
        );
        activities.insert(
            "Debate Team".to_string(),
            seed(
                "Develop public speaking and argumentation skills",
                "Fridays, 3:30 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu"],
            ),
        );
        Self::new(activities)
    }

    /// Snapshot of every activity with its full participant list.
    pub fn all(&self) -> BTreeMap<String, Activity> {
        self.activities.lock().unwrap().clone()
    }

    /// Appends `email` to the activity's roster. `max_participants` is a soft
    /// ceiling and is not enforced here.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.activities.lock().unwrap();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.activities.lock().unwrap();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(StoreError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }
}

fn seed(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        ActivityStore::with_seed_data()
    }

    #[test]
    fn signup_appends_in_order() {
        let store = store();

        store.signup("Basketball", "first@example.com").unwrap();
        store.signup("Basketball", "second@example.com").unwrap();

        let activities = store.all();
        assert_eq!(
            activities["Basketball"].participants,
            vec!["first@example.com", "second@example.com"]
        );
    }

    #[test]
    fn signup_unknown_activity_fails() {
        let err = store().signup("Underwater Hockey", "a@example.com");
        assert_eq!(err, Err(StoreError::ActivityNotFound));
    }

    #[test]
    fn signup_twice_is_rejected_without_duplicate() {
        let store = store();

        store.signup("Soccer", "dup@example.com").unwrap();
        let err = store.signup("Soccer", "dup@example.com");
        assert_eq!(err, Err(StoreError::AlreadySignedUp));

        let participants = &store.all()["Soccer"].participants;
        assert_eq!(
            participants.iter().filter(|p| *p == "dup@example.com").count(),
            1
        );
    }

    #[test]
    fn unregister_removes_only_that_email() {
        let store = store();
        store.signup("Basketball", "stay@example.com").unwrap();
        store.signup("Basketball", "leave@example.com").unwrap();

        store.unregister("Basketball", "leave@example.com").unwrap();

        let participants = &store.all()["Basketball"].participants;
        assert_eq!(participants, &vec!["stay@example.com".to_string()]);
    }

    #[test]
    fn unregister_unknown_activity_fails() {
        let err = store().unregister("Underwater Hockey", "a@example.com");
        assert_eq!(err, Err(StoreError::ActivityNotFound));
    }

    #[test]
    fn unregister_non_participant_fails() {
        let err = store().unregister("Basketball", "ghost@example.com");
        assert_eq!(err, Err(StoreError::NotSignedUp));
    }

    #[test]
    fn seed_includes_preregistered_students() {
        let activities = store().all();
        assert!(activities["Chess Club"]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }
}
