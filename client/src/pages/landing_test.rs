use super::*;

fn count_with(status: RoadmapStatus) -> usize {
    ROADMAP.iter().filter(|item| item.status == status).count()
}

#[test]
fn roadmap_has_two_complete_and_two_pending() {
    assert_eq!(ROADMAP.len(), 4);
    assert_eq!(count_with(RoadmapStatus::Complete), 2);
    assert_eq!(count_with(RoadmapStatus::Pending), 2);
}

#[test]
fn roadmap_lists_completed_items_first() {
    let statuses: Vec<RoadmapStatus> = ROADMAP.iter().map(|item| item.status).collect();
    assert_eq!(
        statuses,
        vec![RoadmapStatus::Complete, RoadmapStatus::Complete, RoadmapStatus::Pending, RoadmapStatus::Pending]
    );
}

#[test]
fn status_markers_differ() {
    assert_ne!(RoadmapStatus::Complete.marker(), RoadmapStatus::Pending.marker());
}

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;

    use super::super::*;

    fn render_landing() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <LandingPage/> }.to_html())
    }

    #[test]
    fn renders_four_rows_in_fixed_order() {
        let html = render_landing();
        assert_eq!(html.matches("roadmap__item--complete").count(), 2);
        assert_eq!(html.matches("roadmap__item--pending").count(), 2);

        let positions: Vec<usize> = ROADMAP.iter().map(|item| html.find(item.label).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn renders_internal_and_external_links() {
        let html = render_landing();
        assert!(html.contains("href=\"/docs\""));
        assert!(html.contains(REPOSITORY_URL));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn renders_heading() {
        let html = render_landing();
        assert!(html.contains(HEADING));
    }
}
