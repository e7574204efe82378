//! Subsites: sections, companies and personal blogs.

use crate::{MuteAction, Page, SubsiteTimelineSorting, SubsitesListType};
use cmtt_core::EndpointDescriptor;

/// `GET /subsite/{id}/timeline{sorting}`
pub fn timeline(id: u64, sorting: SubsiteTimelineSorting, page: Page) -> EndpointDescriptor {
    page.apply(EndpointDescriptor::get(format!("/subsite/{}/timeline{}", id, sorting)))
}

/// `GET /subsites_list/{kind}`
pub fn list(kind: SubsitesListType) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/subsites_list/{}", kind))
}

/// `GET /subsite/{subsite_id}/vacancies`
pub fn vacancies(subsite_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/subsite/{}/vacancies", subsite_id))
}

/// `GET /subsite/{subsite_id}/vacancies/more/{last_id}`
pub fn vacancies_more(subsite_id: u64, last_id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/subsite/{}/vacancies/more/{}", subsite_id, last_id))
}

/// `GET /subsite/{id}/subscribe`
///
/// The remote API accepts this state change on GET only.
pub fn subscribe(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/subsite/{}/subscribe", id))
}

/// `GET /subsite/{id}/unsubscribe`
pub fn unsubscribe(id: u64) -> EndpointDescriptor {
    EndpointDescriptor::get(format!("/subsite/{}/unsubscribe", id))
}

/// `POST /subsite/mute`
pub fn mute(action: MuteAction, id: u64) -> EndpointDescriptor {
    EndpointDescriptor::post("/subsite/mute")
        .param("action", action.to_string())
        .param("id", id)
}
