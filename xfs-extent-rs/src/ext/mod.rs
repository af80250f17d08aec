pub mod io_ext;
