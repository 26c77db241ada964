use std::collections::BTreeMap;

use crate::models::Activity;

/// The fixed activity program the registry starts with.
///
/// Names are the registry keys; emails are the students already enrolled at
/// the start of the school year.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    insert(
        &mut activities,
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    insert(
        &mut activities,
        "Basketball Team",
        "Competitive basketball team for intramural and regional competitions",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    );
    insert(
        &mut activities,
        "Tennis Club",
        "Learn tennis skills and participate in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        10,
        &["sarah@mergington.edu"],
    );
    insert(
        &mut activities,
        "Drama Club",
        "Perform in theatrical productions and develop acting skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        25,
        &["jessica@mergington.edu", "james@mergington.edu"],
    );
    insert(
        &mut activities,
        "Music Band",
        "Play instruments and perform in concerts and school events",
        "Fridays, 3:30 PM - 4:30 PM",
        20,
        &["lucas@mergington.edu"],
    );
    insert(
        &mut activities,
        "Debate Team",
        "Develop public speaking and argumentation skills through competitive debate",
        "Mondays, 4:00 PM - 5:30 PM",
        12,
        &["andrew@mergington.edu", "rachel@mergington.edu"],
    );
    insert(
        &mut activities,
        "Science Club",
        "Explore scientific experiments and participate in science fairs",
        "Thursdays, 3:30 PM - 4:30 PM",
        18,
        &["tyler@mergington.edu"],
    );
    insert(
        &mut activities,
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    insert(
        &mut activities,
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );

    activities
}

fn insert(
    map: &mut BTreeMap<String, Activity>,
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) {
    map.insert(
        name.to_string(),
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        },
    );
}
