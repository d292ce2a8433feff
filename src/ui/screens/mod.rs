pub mod link_hub;
