use tipline_test_utils::prelude::*;

use crate::server::data::official_stat::OfficialStatRepository;

mod increment;
