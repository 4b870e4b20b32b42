use romlens_lib::display::{REGION_COLUMN_TITLES, region_rows};

use crate::commands::print_table;

pub(crate) fn run_regions() {
    let rows = region_rows();
    print_table(&REGION_COLUMN_TITLES, &rows);
    crate::log_blank();
    log::info!("{} country codes", rows.len());
}
