use travel::{Comment, Content, Place, User};

pub const SUMMARY: &str = "
# About TravelAI

TravelAI is your smart companion for discovering the world. 

## Features
- **Smart Recommendations**: AI-powered suggestions based on your interests.
- **Trip Tracking**: Keep a log of all the places you've visited.
- **Community**: Share your experiences with others.

*Start your journey today!*
";

pub fn summary() -> Content {
    Content::new(SUMMARY)
}

pub fn user() -> User {
    User {
        id: "1".into(),
        handle: "usera".into(),
        display_name: "User A".into(),
        avatar_url: "https://picsum.photos/200/200".into(),
        role: None,
    }
}

pub fn places() -> Vec<Place> {
    vec![
        Place {
            id: "1".into(),
            name: "Ha Long Bay".into(),
            address: "Quang Ninh, Vietnam".into(),
            thumb_url: "https://picsum.photos/800/400?random=1".into(),
            description: "A UNESCO World Heritage Site featuring thousands of limestone karsts.".into(),
            content: "# Ha Long Bay\n\nHa Long Bay features thousands of limestone karsts and isles in various shapes and sizes. \n\n## Activities\n- Kayaking\n- Cave exploration\n- Overnight cruise".into(),
        },
        Place {
            id: "2".into(),
            name: "Hoi An Ancient Town".into(),
            address: "Quang Nam, Vietnam".into(),
            thumb_url: "https://picsum.photos/800/400?random=2".into(),
            description: "An exceptionally well-preserved example of a South-East Asian trading port.".into(),
            content: "# Hoi An Ancient Town\n\nHoi An is a city on Vietnam’s central coast known for its well-preserved Ancient Town, cut through with canals.\n\n## Highlights\n- Japanese Covered Bridge\n- Lantern Festival\n- Tailor shops".into(),
        },
        Place {
            id: "3".into(),
            name: "Da Lat (AI Suggested)".into(),
            address: "Lam Dong, Vietnam".into(),
            thumb_url: "https://picsum.photos/800/400?random=3".into(),
            description: "The city of eternal spring.".into(),
            content: "# Da Lat\n\nKnown for its cool weather and French colonial architecture.".into(),
        },
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "101".into(),
            author: "traveler123".into(),
            place_id: "1".into(),
            body: "Amazing experience! Must visit.".into(),
            date: "2023-10-15".into(),
            rating: None,
            place_name: None,
        },
        Comment {
            id: "102".into(),
            author: "wanderlust_jane".into(),
            place_id: "1".into(),
            body: "The sunset was breathtaking.".into(),
            date: "2023-10-16".into(),
            rating: None,
            place_name: None,
        },
    ]
}
