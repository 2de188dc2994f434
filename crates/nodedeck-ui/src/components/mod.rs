/// UI components for nodedeck dashboards

pub mod filter_card;
