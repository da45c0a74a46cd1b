pub mod nist_vectors;
