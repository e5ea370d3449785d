pub mod trip_form;
