//! Shared catalogue fixtures for the integration tests.

use distro_image_resolver::Catalog;
use serde_json::{Value, json};

/// Simplestreams-shaped fixture with two products.
///
/// The 16.04 product publishes three dated builds; ebs-backed images exist
/// only in us-west-2 and ssd-backed ones only in us-west-1, which is what
/// the validator-independence and no-match tests lean on.
#[allow(dead_code)]
pub fn sample_catalog_json() -> Value {
    json!({
        "content_id": "com.ubuntu.cloud:released:aws",
        "datatype": "image-ids",
        "format": "products:1.0",
        "products": {
            "com.ubuntu.cloud:server:16.04:amd64": {
                "arch": "amd64",
                "os": "ubuntu",
                "release": "xenial",
                "version": "16.04",
                "versions": {
                    "20151231": {
                        "items": {
                            "usw2he": {
                                "crsn": "us-west-2",
                                "root_store": "ebs",
                                "virt": "hvm",
                                "id": "ami-oldest"
                            }
                        }
                    },
                    "20160101": {
                        "items": {
                            "usw2he": {
                                "crsn": "us-west-2",
                                "root_store": "ebs",
                                "virt": "hvm",
                                "id": "ami-early"
                            },
                            "usw1sh": {
                                "crsn": "us-west-1",
                                "root_store": "ssd",
                                "virt": "hvm",
                                "id": "ami-ssd-early"
                            }
                        }
                    },
                    "20160215": {
                        "items": {
                            "usw2he": {
                                "crsn": "us-west-2",
                                "root_store": "ebs",
                                "virt": "hvm",
                                "id": "ami-latest"
                            },
                            "usw1sh": {
                                "crsn": "us-west-1",
                                "root_store": "ssd",
                                "virt": "hvm",
                                "id": "ami-ssd-latest"
                            },
                            "usw2hp": {
                                "crsn": "us-west-2",
                                "root_store": "ebs",
                                "virt": "pv",
                                "id": "ami-pv-latest"
                            }
                        }
                    }
                }
            },
            "com.ubuntu.cloud:server:14.04:amd64": {
                "arch": "amd64",
                "os": "ubuntu",
                "release": "trusty",
                "version": "14.04",
                "versions": {
                    "20160105": {
                        "items": {
                            "usw2ie": {
                                "crsn": "us-west-2",
                                "root_store": "instance",
                                "virt": "hvm",
                                "id": "ami-trusty"
                            }
                        }
                    }
                }
            }
        }
    })
}

#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    catalog_from(sample_catalog_json())
}

#[allow(dead_code)]
pub fn catalog_from(document: Value) -> Catalog {
    serde_json::from_value(document).expect("fixture catalogue must deserialize")
}
