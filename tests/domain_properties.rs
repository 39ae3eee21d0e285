//! Property-based tests for walk-ordering and friend-matching invariants

use chrono::NaiveDate;
use dogwalk::domain::{
    Coordinate, Dog, DogId, DogName, FriendMatcher, NewWalk, RegisterWalkRequest, Walk,
    WalkId, WalkRegistry,
};
use proptest::collection::vec;
use proptest::prelude::*;
use rstest::rstest;

mod generators {
    use super::*;

    pub fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Coordinate { x, y })
    }

    pub fn path() -> impl Strategy<Value = Vec<Coordinate>> {
        vec(coordinate(), 0..64)
    }

    pub fn dog_name() -> impl Strategy<Value = DogName> {
        proptest::string::string_regex("[A-Z][a-z]{1,10}")
            .unwrap()
            .prop_filter_map("Invalid dog name", |s| DogName::try_new(s).ok())
    }
}

fn dog(id: i64, name: DogName) -> Dog {
    Dog {
        id: DogId::new(id),
        name,
        birthday: NaiveDate::from_ymd_opt(2021, 5, 12).unwrap(),
    }
}

proptest! {
    #[test]
    fn sequence_indexes_follow_input_position(path in generators::path()) {
        let walk = NewWalk::from_coordinates(Vec::new(), &path);
        prop_assert_eq!(walk.path.len(), path.len());
        for (index, point) in walk.path.iter().enumerate() {
            prop_assert_eq!(point.sequence, index as i32);
            prop_assert_eq!(point.coordinate, path[index]);
        }
    }

    #[test]
    fn hydration_restores_registration_order(path in generators::path(), seed in any::<u64>()) {
        let registered = NewWalk::from_coordinates(Vec::new(), &path);

        // storage may iterate rows in any order
        let mut shuffled = registered.path.clone();
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = (seed as usize).wrapping_mul(31).wrapping_add(i * 17) % len;
                shuffled.swap(i, j);
            }
        }

        let walk = Walk::hydrate(WalkId::new(1), Vec::new(), shuffled);
        prop_assert_eq!(walk.coordinates(), path);
    }

    #[test]
    fn friends_equal_the_identity_difference(
        own_names in vec(generators::dog_name(), 1..4),
        other_names in vec(generators::dog_name(), 0..6),
    ) {
        // own dogs get ids 1..=n, the others follow, so the sets are disjoint by construction
        let own_dogs: Vec<Dog> = own_names
            .iter()
            .enumerate()
            .map(|(i, name)| dog(i as i64 + 1, name.clone()))
            .collect();
        let offset = own_dogs.len() as i64;
        let other_dogs: Vec<Dog> = other_names
            .iter()
            .enumerate()
            .map(|(i, name)| dog(offset + i as i64 + 1, name.clone()))
            .collect();

        let walk = Walk {
            id: WalkId::new(1),
            dogs: own_dogs,
            path: Vec::new(),
        };
        let other_walks: Vec<Walk> = other_dogs
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, other)| Walk {
                id: WalkId::new(100 + i as i64),
                dogs: vec![other],
                path: Vec::new(),
            })
            .collect();

        let mut picture_fetched = false;
        let (response, event) = FriendMatcher::match_friends(
            &walk,
            &other_walks,
            || {
                picture_fetched = true;
                vec![1]
            },
            chrono::Utc::now(),
        );

        let expected: Vec<DogName> = other_dogs.iter().map(|d| d.name.clone()).collect();
        prop_assert_eq!(&response.friends, &expected);

        if expected.is_empty() {
            prop_assert!(!picture_fetched);
            prop_assert!(event.is_none());
            prop_assert!(response.picture_of_friends.is_empty());
        } else {
            prop_assert!(picture_fetched);
            prop_assert!(event.is_some());
            prop_assert_eq!(response.picture_of_friends, vec![1]);
        }
    }

    #[test]
    fn an_empty_other_walk_list_never_fetches_the_picture(
        own_names in vec(generators::dog_name(), 0..4),
    ) {
        let own_dogs: Vec<Dog> = own_names
            .iter()
            .enumerate()
            .map(|(i, name)| dog(i as i64 + 1, name.clone()))
            .collect();
        let walk = Walk {
            id: WalkId::new(1),
            dogs: own_dogs,
            path: Vec::new(),
        };

        let mut picture_fetched = false;
        let (response, event) = FriendMatcher::match_friends(
            &walk,
            &[],
            || {
                picture_fetched = true;
                vec![1]
            },
            chrono::Utc::now(),
        );

        prop_assert!(!picture_fetched);
        prop_assert!(response.is_empty());
        prop_assert!(event.is_none());
    }
}

#[rstest]
#[case(&["Rex"], &["Yuna"], &["Rex"])]
#[case(&["Rex", "Abby"], &["Yuna"], &["Rex", "Abby"])]
#[case(&["Rex", "Yuna", "Rex"], &["Yuna"], &["Rex"])]
#[case(&["Yuna", "Abby"], &["Abby", "Yuna"], &[])]
fn unknown_names_are_the_input_order_set_difference(
    #[case] requested: &[&str],
    #[case] known: &[&str],
    #[case] expected_unknown: &[&str],
) {
    let request = RegisterWalkRequest {
        dogs_on_walk: requested.iter().map(|name| (*name).to_string()).collect(),
        path: Vec::new(),
    };
    let known_dogs: Vec<Dog> = known
        .iter()
        .enumerate()
        .map(|(i, name)| dog(i as i64 + 1, DogName::try_new((*name).to_string()).unwrap()))
        .collect();

    let result = WalkRegistry::validate(&request, &known_dogs);
    if expected_unknown.is_empty() {
        assert!(result.is_ok());
    } else {
        let error = result.unwrap_err();
        match error {
            dogwalk::Error::UnknownDogs { names } => {
                let expected: Vec<String> =
                    expected_unknown.iter().map(|name| (*name).to_string()).collect();
                assert_eq!(names, expected);
            }
            other => panic!("expected UnknownDogs, got {other:?}"),
        }
    }
}
