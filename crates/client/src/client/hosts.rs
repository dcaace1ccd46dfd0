//! Topology v1 host methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, HostListOptions};
use crate::models::Host;
use crate::pagination::HeaderPaginatedList;

impl Dynatrace {
    /// List hosts. Pagination follows the `Next-Page-Key` response header.
    pub fn list_hosts(&self, options: &HostListOptions) -> HeaderPaginatedList<Host> {
        endpoints::list_hosts(&self.http, options)
    }
}
