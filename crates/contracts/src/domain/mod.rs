pub mod a001_support_contact;
