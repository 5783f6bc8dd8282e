//! Merged activity feed
//!
//! Pulls the three reviewable tables in parallel and merges them into a
//! single newest-first feed, as shown on the dashboard landing page.

use serde_json::json;

use crate::{
    error::AppResult,
    models::{
        feed::{FeedItem, FeedKind},
        it_request::ItEquipmentRequest,
        travel::TravelNotification,
        vacation::VacationRequest,
    },
    repository::Repository,
    search,
};

/// The feed shows at most the 50 most recent items
const MAX_FEED_ITEMS: usize = 50;

#[derive(Clone)]
pub struct FeedService {
    repository: Repository,
}

impl FeedService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn feed(&self, query: Option<&str>) -> AppResult<Vec<FeedItem>> {
        let (vacations, travel, it_requests) = tokio::try_join!(
            self.repository.vacations.list(),
            self.repository.travel.list(),
            self.repository.it_requests.list(),
        )?;

        let mut items: Vec<FeedItem> = Vec::new();
        items.extend(vacations.into_iter().map(vacation_item));
        items.extend(travel.into_iter().map(travel_item));
        items.extend(it_requests.into_iter().map(it_request_item));

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(q) = query {
            if !q.is_empty() {
                items.retain(|item| {
                    search::any_match(
                        [
                            item.person.as_str(),
                            item.email.as_str(),
                            item.summary.as_str(),
                        ],
                        q,
                    )
                });
            }
        }

        items.truncate(MAX_FEED_ITEMS);
        Ok(items)
    }
}

fn vacation_item(request: VacationRequest) -> FeedItem {
    let kind = FeedKind::Vacation;
    let status = request
        .status_while_away
        .clone()
        .unwrap_or_else(|| "-".to_string());
    FeedItem {
        id: request.id,
        created_at: request.created_at,
        kind,
        label: kind.label(),
        summary: format!(
            "{} ha solicitado vacaciones con estado: {}",
            request.full_name, status
        ),
        details: json!({ "status_while_away": request.status_while_away }),
        person: request.full_name,
        email: request.email,
        review_status: request.review_status,
        table: kind.table(),
    }
}

fn travel_item(notification: TravelNotification) -> FeedItem {
    let kind = FeedKind::Travel;
    FeedItem {
        id: notification.id,
        created_at: notification.created_at,
        kind,
        label: kind.label(),
        summary: format!(
            "{} viajará a {} desde {} hasta {}",
            notification.full_name,
            notification.destination,
            notification.start_date.format("%d/%m"),
            notification.end_date.format("%d/%m"),
        ),
        details: json!({
            "division": notification.division,
            "destination": notification.destination,
            "start_date": notification.start_date.format("%d/%m/%Y").to_string(),
            "end_date": notification.end_date.format("%d/%m/%Y").to_string(),
        }),
        person: notification.full_name,
        email: notification.email,
        review_status: notification.review_status,
        table: kind.table(),
    }
}

fn it_request_item(request: ItEquipmentRequest) -> FeedItem {
    let kind = FeedKind::ItEquipment;
    FeedItem {
        id: request.id,
        created_at: request.created_at,
        kind,
        label: kind.label(),
        summary: format!(
            "{} ha solicitado equipo: {}",
            request.requester, request.equipment
        ),
        details: json!({ "equipment": request.equipment }),
        person: request.requester,
        email: request.email,
        review_status: request.review_status,
        table: kind.table(),
    }
}
