use travel::{Comment, Place, Role, User, VisitedLink};

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            handle: "user_a".into(),
            display_name: "Nguyễn Văn A".into(),
            avatar_url: "https://picsum.photos/seed/u1/100/100".into(),
            role: Some(Role::User),
        },
        User {
            id: "u2".into(),
            handle: "admin".into(),
            display_name: "Quản trị viên".into(),
            avatar_url: "https://picsum.photos/seed/u2/100/100".into(),
            role: Some(Role::Admin),
        },
    ]
}

pub fn places() -> Vec<Place> {
    vec![
        Place {
            id: "p1".into(),
            name: "Vịnh Hạ Long".into(),
            address: "Quảng Ninh".into(),
            thumb_url: "https://picsum.photos/seed/p1/400/300".into(),
            description: "Di sản thiên nhiên thế giới với hàng ngàn đảo đá vôi.".into(),
            content: "Nội dung chi tiết về Vịnh Hạ Long...".into(),
        },
        Place {
            id: "p2".into(),
            name: "Phố Cổ Hội An".into(),
            address: "Quảng Nam".into(),
            thumb_url: "https://picsum.photos/seed/p2/400/300".into(),
            description: "Đô thị cổ được bảo tồn nguyên vẹn từ thế kỷ 16.".into(),
            content: "Nội dung chi tiết về Hội An...".into(),
        },
        Place {
            id: "p3".into(),
            name: "Đà Lạt".into(),
            address: "Lâm Đồng".into(),
            thumb_url: "https://picsum.photos/seed/p3/400/300".into(),
            description: "Thành phố ngàn hoa với khí hậu ôn hòa.".into(),
            content: "Nội dung chi tiết về Đà Lạt...".into(),
        },
    ]
}

pub fn visited() -> Vec<VisitedLink> {
    vec![VisitedLink::new("u1", "p1")]
}

pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "c1".into(),
            author: "user_a".into(),
            place_id: "p1".into(),
            body: "Chỗ này rất đẹp, tôi rất thích!".into(),
            date: "2023-10-25".into(),
            rating: Some(5),
            place_name: Some("Vịnh Hạ Long".into()),
        },
        Comment {
            id: "c2".into(),
            author: "user_a".into(),
            place_id: "p2".into(),
            body: "Đồ ăn ngon nhưng hơi đông khách.".into(),
            date: "2023-11-01".into(),
            rating: Some(4),
            place_name: Some("Phố Cổ Hội An".into()),
        },
    ]
}
