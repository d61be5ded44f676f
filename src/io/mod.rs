pub mod csv_write;
